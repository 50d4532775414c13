// Request guards shared by the handlers

pub mod rate_limit;
pub mod session;

pub use rate_limit::RateLimiters;
pub use session::{session_user, RequireSession};
