// User domain module
// Operators who may drive the selection engine

pub mod errors;
pub mod value_objects;

pub use errors::UserError;
pub use value_objects::Username;
