use uuid::Uuid;

use super::value_objects::TeamStatus;

/// Domain events that occur within the Team aggregate
///
/// Every state change on a team produces one of these. The selection engine
/// and the HTTP handlers log them as the audit trail of a session.
///
/// # Example
/// ```
/// use teamdraw_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Created {
///     team_id: Uuid::new_v4(),
///     name: "Team A".to_string(),
///     members: 3,
/// };
/// assert_eq!(event.name(), "created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is added
    Created {
        team_id: Uuid,
        name: String,
        /// Number of members on the new team
        members: usize,
    },
    /// Fired when a team is edited directly
    Updated {
        team_id: Uuid,
        status: TeamStatus,
        active: bool,
    },
    /// Fired when a team is drawn for presentation
    Selected { team_id: Uuid },
    /// Fired when a selected team is confirmed as presented
    Presented { team_id: Uuid },
    /// Fired when a team is returned to the pool
    Skipped { team_id: Uuid },
    /// Fired when a team is removed
    Deleted { team_id: Uuid },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::Updated { team_id, .. } => *team_id,
            TeamEvent::Selected { team_id } => *team_id,
            TeamEvent::Presented { team_id } => *team_id,
            TeamEvent::Skipped { team_id } => *team_id,
            TeamEvent::Deleted { team_id } => *team_id,
        }
    }

    /// Short name used as a structured log field
    pub fn name(&self) -> &'static str {
        match self {
            TeamEvent::Created { .. } => "created",
            TeamEvent::Updated { .. } => "updated",
            TeamEvent::Selected { .. } => "selected",
            TeamEvent::Presented { .. } => "presented",
            TeamEvent::Skipped { .. } => "skipped",
            TeamEvent::Deleted { .. } => "deleted",
        }
    }

    /// Emits the event to the log
    pub fn record(&self) {
        tracing::info!(event = self.name(), team_id = %self.team_id(), "team event");
    }
}
