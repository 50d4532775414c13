use thiserror::Error;
use uuid::Uuid;

use crate::domain::repositories::RepositoryError;
use crate::domain::team::TeamError;

/// Errors that can occur while driving team selection
///
/// "No teams remaining" is not an error: `randomize` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type SelectionResult<T> = Result<T, SelectionError>;
