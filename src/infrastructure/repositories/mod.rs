// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_team_repository;
pub mod sqlite_user_repository;

pub use sqlite_team_repository::SqliteTeamRepository;
pub use sqlite_user_repository::SqliteUserRepository;

use crate::domain::repositories::RepositoryError;

/// Maps unique-constraint failures onto domain conflicts
pub(crate) fn map_write_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let message = db_error.message();
            if message.contains("teams.name") {
                return RepositoryError::DuplicateName;
            }
            if message.contains("teams.active") {
                return RepositoryError::ActiveConflict;
            }
            if message.contains("users.username") {
                return RepositoryError::DuplicateUsername;
            }
        }
    }
    RepositoryError::Database(error)
}
