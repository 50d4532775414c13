// Selection engine
// Drives the UNPRESENTED -> CURRENTLY_SELECTED -> PRESENTED state machine

pub mod engine;
pub mod errors;

pub use engine::SelectionEngine;
pub use errors::SelectionError;
