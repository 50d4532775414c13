use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::team::{Team, TeamStatus};

/// Repository trait for Team aggregate
///
/// Implementations must keep at most one team active at any time.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team
    ///
    /// Fails with `DuplicateName` if the name is taken.
    async fn create(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Overwrite every mutable field of an existing team
    ///
    /// Fails with `NotFound`, `DuplicateName` or `ActiveConflict`.
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Write only the status, active flag and timestamp of an existing team
    ///
    /// Leaves name and members as stored, so a concurrent edit to them is
    /// kept. Fails with `NotFound` or `ActiveConflict`.
    async fn update_status(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// All teams ordered by name
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    /// All teams with the given status
    async fn find_by_status(&self, status: TeamStatus) -> Result<Vec<Team>, RepositoryError>;

    /// The team with `active = true`, if any
    async fn find_active(&self) -> Result<Option<Team>, RepositoryError>;

    /// Atomically makes `team` the only active team
    ///
    /// Clears `active` on every other team and writes the selected team's
    /// status and flag in one transaction. The write only applies while the
    /// stored team is still unpresented; returns `false` (and changes
    /// nothing) otherwise.
    async fn activate(&self, team: &Team) -> Result<bool, RepositoryError>;

    /// Marks every team unpresented and inactive; returns the number of teams
    async fn reset_all(&self) -> Result<u64, RepositoryError>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Delete every team; returns the number removed
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
