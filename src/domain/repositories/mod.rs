// Repository ports
// Infrastructure adapters implement these traits

pub mod team_repository;
pub mod user_repository;

pub use team_repository::TeamRepository;
pub use user_repository::{User, UserRepository};

use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("A team with this name already exists")]
    DuplicateName,

    #[error("This username is already taken")]
    DuplicateUsername,

    #[error("Another team is already active")]
    ActiveConflict,

    #[error("Record not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Stored record is invalid: {0}")]
    Corrupt(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
