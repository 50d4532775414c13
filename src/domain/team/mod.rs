// Team domain module
// Contains team aggregate root, value objects, errors, and domain events

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::TeamError;
pub use events::TeamEvent;
pub use team::{Team, TeamChanges};
pub use value_objects::TeamStatus;
