use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::{SelectionError, SelectionResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamEvent, TeamStatus};

/// Picks teams at random and moves them through their presentation status
///
/// Every transition runs while holding the engine's lock, so transitions
/// issued through one engine are applied one at a time. The lock also owns
/// the random number generator.
///
/// The engine trusts the order of calls it receives: confirming the previous
/// team before drawing the next one is up to the caller.
pub struct SelectionEngine<R> {
    repository: R,
    rng: Mutex<StdRng>,
}

impl<R: TeamRepository> SelectionEngine<R> {
    /// Creates an engine seeded from OS entropy
    pub fn new(repository: R) -> Self {
        Self::with_rng(repository, StdRng::from_entropy())
    }

    /// Creates an engine with a caller-supplied generator
    pub fn with_rng(repository: R, rng: StdRng) -> Self {
        Self {
            repository,
            rng: Mutex::new(rng),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Draws an unpresented team uniformly at random and makes it the only active team
    ///
    /// Returns `Ok(None)` without touching any team when no unpresented team
    /// remains. If a candidate stops being unpresented between the read and
    /// the write (an edit that bypassed the engine), it is dropped and the
    /// draw is repeated over the remaining candidates.
    pub async fn randomize(&self) -> SelectionResult<Option<Team>> {
        let mut rng = self.rng.lock().await;
        let mut candidates = self
            .repository
            .find_by_status(TeamStatus::Unpresented)
            .await?;

        debug!(candidates = candidates.len(), "drawing next team");

        while !candidates.is_empty() {
            let index = rng.gen_range(0..candidates.len());
            let mut team = candidates.swap_remove(index);
            let event = team.select()?;

            if self.repository.activate(&team).await? {
                event.record();
                info!(team_id = %team.id(), name = team.name(), "team selected");
                return Ok(Some(team));
            }

            warn!(team_id = %team.id(), "candidate changed before it could be selected");
        }

        info!("all teams have presented");
        Ok(None)
    }

    /// Marks a team as presented and inactive
    pub async fn confirm(&self, team_id: Uuid) -> SelectionResult<Team> {
        self.transition(team_id, Team::confirm).await
    }

    /// Returns a team to the unpresented pool and clears its active flag
    pub async fn skip(&self, team_id: Uuid) -> SelectionResult<Team> {
        self.transition(team_id, Team::skip).await
    }

    /// Returns every team to the pool; returns the teams after the reset
    pub async fn reset(&self) -> SelectionResult<Vec<Team>> {
        let _guard = self.rng.lock().await;
        let count = self.repository.reset_all().await?;
        info!(teams = count, "all teams reset");

        Ok(self.repository.find_all().await?)
    }

    /// The team currently up for presentation, if any
    pub async fn active(&self) -> SelectionResult<Option<Team>> {
        Ok(self.repository.find_active().await?)
    }

    /// Applies a status change and writes only the status columns
    ///
    /// Name and members are re-read after the write, so an edit that landed
    /// in between is reflected rather than overwritten.
    async fn transition(
        &self,
        team_id: Uuid,
        apply: fn(&mut Team) -> TeamEvent,
    ) -> SelectionResult<Team> {
        let _guard = self.rng.lock().await;
        let mut team = self.load(team_id).await?;

        let event = apply(&mut team);
        self.repository.update_status(&team).await?;
        event.record();

        self.load(team_id).await
    }

    async fn load(&self, team_id: Uuid) -> SelectionResult<Team> {
        self.repository
            .find_by_id(team_id)
            .await?
            .ok_or(SelectionError::TeamNotFound(team_id))
    }
}
