// Authentication primitives
// Password hashing, signed session tokens, and the session cookie

pub mod jwt;
pub mod password;
pub mod session;
