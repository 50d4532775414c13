use super::errors::TeamError;
use super::events::TeamEvent;
use super::value_objects::{Members, TeamName, TeamStatus};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// Represents a presentation group waiting for, taking, or done with its turn.
///
/// # Invariants
/// - Name is trimmed and 1-100 characters
/// - 1-20 members, each trimmed and 1-100 characters
/// - `active` implies `status == CurrentlySelected`
///
/// At-most-one-active across all teams is a store-level invariant and is
/// enforced by the repository, not here.
///
/// # Example
/// ```
/// use teamdraw_api::domain::team::{Team, TeamStatus};
///
/// let (team, events) = Team::new(
///     "Team A".to_string(),
///     vec!["Ada".to_string(), "Grace".to_string()],
/// ).expect("valid team");
///
/// assert_eq!(team.name(), "Team A");
/// assert_eq!(team.status(), TeamStatus::Unpresented);
/// assert!(!team.is_active());
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Uuid,
    name: String,
    members: Vec<String>,
    status: TeamStatus,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial edit of a team; only supplied fields are overwritten
#[derive(Debug, Clone, Default)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
    pub status: Option<TeamStatus>,
    pub active: Option<bool>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(TeamError)` - If name or members are invalid
    ///
    /// # Business Rules Enforced
    /// - Name and members are validated and trimmed
    /// - Initial status is always Unpresented and the team is inactive
    /// - Team generates a Created event
    pub fn new(name: String, members: Vec<String>) -> Result<(Self, Vec<TeamEvent>), TeamError> {
        let name = TeamName::new(name)?;
        let members = Members::new(members)?;
        let now = Utc::now();

        let team = Self {
            id: Uuid::new_v4(),
            name: name.into_inner(),
            members: members.into_inner(),
            status: TeamStatus::Unpresented,
            active: false,
            created_at: now,
            updated_at: now,
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            name: team.name.clone(),
            members: team.members.len(),
        }];

        Ok((team, events))
    }

    /// Draws the team for presentation
    ///
    /// # Business Rules
    /// - Team must be Unpresented
    /// - Team becomes CurrentlySelected and active
    pub fn select(&mut self) -> Result<TeamEvent, TeamError> {
        let next_status = TeamStatus::CurrentlySelected;
        if !self.status.can_transition_to(next_status) {
            return Err(TeamError::InvalidTransition {
                from: self.status,
                to: next_status,
            });
        }

        self.status = next_status;
        self.active = true;
        self.touch();

        Ok(TeamEvent::Selected { team_id: self.id })
    }

    /// Marks the team as presented
    ///
    /// Applies unconditionally: confirming an already-presented team leaves
    /// it presented.
    pub fn confirm(&mut self) -> TeamEvent {
        self.status = TeamStatus::Presented;
        self.active = false;
        self.touch();

        TeamEvent::Presented { team_id: self.id }
    }

    /// Returns the team to the unpresented pool
    pub fn skip(&mut self) -> TeamEvent {
        self.status = TeamStatus::Unpresented;
        self.active = false;
        self.touch();

        TeamEvent::Skipped { team_id: self.id }
    }

    /// Applies a direct edit
    ///
    /// Every supplied field is validated as on creation. Nothing is changed
    /// if any field is invalid or the result would be active without being
    /// CurrentlySelected.
    pub fn apply_changes(&mut self, changes: TeamChanges) -> Result<TeamEvent, TeamError> {
        let name = changes.name.map(TeamName::new).transpose()?;
        let members = changes.members.map(Members::new).transpose()?;
        let status = changes.status.unwrap_or(self.status);
        let active = changes.active.unwrap_or(self.active);

        if active && status != TeamStatus::CurrentlySelected {
            return Err(TeamError::InactiveStatus(status));
        }

        if let Some(name) = name {
            self.name = name.into_inner();
        }
        if let Some(members) = members {
            self.members = members.into_inner();
        }
        self.status = status;
        self.active = active;
        self.touch();

        Ok(TeamEvent::Updated {
            team_id: self.id,
            status: self.status,
            active: self.active,
        })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn status(&self) -> TeamStatus {
        self.status
    }

    /// Returns true if this is the team currently being presented
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was stored.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        members: Vec<String>,
        status: TeamStatus,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            members,
            status,
            active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        let (team, _) = Team::new(
            "Team A".to_string(),
            vec!["Ada".to_string(), "Grace".to_string()],
        )
        .unwrap();
        team
    }

    #[test]
    fn create_team_with_valid_fields() {
        let result = Team::new(" Team A ".to_string(), vec![" Ada ".to_string()]);

        assert!(result.is_ok());
        let (team, events) = result.unwrap();

        assert_eq!(team.name(), "Team A");
        assert_eq!(team.members(), &["Ada".to_string()]);
        assert_eq!(team.status(), TeamStatus::Unpresented);
        assert!(!team.is_active());
        assert_eq!(team.created_at(), team.updated_at());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new("".to_string(), vec!["Ada".to_string()]);
        assert_eq!(result.unwrap_err(), TeamError::NameRequired);
    }

    #[test]
    fn create_team_without_members_fails() {
        let result = Team::new("Team A".to_string(), vec![]);
        assert_eq!(result.unwrap_err(), TeamError::NoMembers);
    }

    #[test]
    fn team_generates_created_event() {
        let (team, events) = Team::new(
            "Team A".to_string(),
            vec!["Ada".to_string(), "Grace".to_string()],
        )
        .unwrap();

        match &events[0] {
            TeamEvent::Created {
                team_id,
                name,
                members,
            } => {
                assert_eq!(*team_id, team.id());
                assert_eq!(name, "Team A");
                assert_eq!(*members, 2);
            }
            other => panic!("Expected Created event, got {:?}", other),
        }
    }

    #[test]
    fn select_makes_team_active() {
        let mut team = team();
        let event = team.select().unwrap();

        assert_eq!(event, TeamEvent::Selected { team_id: team.id() });
        assert_eq!(team.status(), TeamStatus::CurrentlySelected);
        assert!(team.is_active());
    }

    #[test]
    fn select_requires_unpresented() {
        let mut team = team();
        team.confirm();

        let result = team.select();
        assert_eq!(
            result.unwrap_err(),
            TeamError::InvalidTransition {
                from: TeamStatus::Presented,
                to: TeamStatus::CurrentlySelected,
            }
        );
        assert!(!team.is_active());
    }

    #[test]
    fn confirm_marks_presented_and_inactive() {
        let mut team = team();
        team.select().unwrap();
        team.confirm();

        assert_eq!(team.status(), TeamStatus::Presented);
        assert!(!team.is_active());
    }

    #[test]
    fn confirm_twice_is_stable() {
        let mut team = team();
        team.confirm();
        team.confirm();

        assert_eq!(team.status(), TeamStatus::Presented);
        assert!(!team.is_active());
    }

    #[test]
    fn skip_returns_team_to_pool() {
        let mut team = team();
        team.select().unwrap();
        let event = team.skip();

        assert_eq!(event, TeamEvent::Skipped { team_id: team.id() });
        assert_eq!(team.status(), TeamStatus::Unpresented);
        assert!(!team.is_active());
        assert!(team.select().is_ok());
    }

    #[test]
    fn apply_changes_merges_only_supplied_fields() {
        let mut team = team();
        team.apply_changes(TeamChanges {
            name: Some("  Renamed ".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(team.name(), "Renamed");
        assert_eq!(team.members(), &["Ada".to_string(), "Grace".to_string()]);
        assert_eq!(team.status(), TeamStatus::Unpresented);
    }

    #[test]
    fn apply_changes_rejects_active_without_selection() {
        let mut team = team();
        let result = team.apply_changes(TeamChanges {
            name: Some("Renamed".to_string()),
            active: Some(true),
            ..Default::default()
        });

        assert_eq!(
            result.unwrap_err(),
            TeamError::InactiveStatus(TeamStatus::Unpresented)
        );
        assert_eq!(team.name(), "Team A");
        assert!(!team.is_active());
    }

    #[test]
    fn apply_changes_allows_active_selected_team() {
        let mut team = team();
        let event = team
            .apply_changes(TeamChanges {
                status: Some(TeamStatus::CurrentlySelected),
                active: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert!(team.is_active());
        assert_eq!(
            event,
            TeamEvent::Updated {
                team_id: team.id(),
                status: TeamStatus::CurrentlySelected,
                active: true,
            }
        );
    }

    #[test]
    fn apply_changes_status_change_on_active_team_must_clear_active() {
        let mut team = team();
        team.select().unwrap();

        let result = team.apply_changes(TeamChanges {
            status: Some(TeamStatus::Presented),
            ..Default::default()
        });
        assert!(result.is_err());

        team.apply_changes(TeamChanges {
            status: Some(TeamStatus::Presented),
            active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(team.status(), TeamStatus::Presented);
    }

    #[test]
    fn apply_changes_validates_members() {
        let mut team = team();
        let result = team.apply_changes(TeamChanges {
            members: Some(vec![]),
            ..Default::default()
        });

        assert_eq!(result.unwrap_err(), TeamError::NoMembers);
        assert_eq!(team.members().len(), 2);
    }
}
