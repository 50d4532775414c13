use serde::{Deserialize, Serialize};

use super::errors::TeamError;

/// Maximum length of a team name, in characters
pub const MAX_NAME_LEN: usize = 100;
/// Maximum number of members on a team
pub const MAX_MEMBERS: usize = 20;
/// Maximum length of a single member name, in characters
pub const MAX_MEMBER_LEN: usize = 100;

/// Presentation status of a team
///
/// # Status Transitions
/// ```text
/// Unpresented -> CurrentlySelected -> Presented
///      ^                |
///      └----------------┘ (skip)
/// ```
/// `Presented` only returns to `Unpresented` through a global reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    /// Team is waiting in the pool
    Unpresented,
    /// Team was drawn and is up for presentation
    CurrentlySelected,
    /// Team has presented
    Presented,
}

impl TeamStatus {
    /// Checks if a selection-driven transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - Unpresented -> CurrentlySelected
    /// - CurrentlySelected -> Presented
    /// - CurrentlySelected -> Unpresented
    ///
    /// # Example
    /// ```
    /// use teamdraw_api::domain::team::value_objects::TeamStatus;
    ///
    /// assert!(TeamStatus::Unpresented.can_transition_to(TeamStatus::CurrentlySelected));
    /// assert!(!TeamStatus::Presented.can_transition_to(TeamStatus::CurrentlySelected));
    /// ```
    pub fn can_transition_to(&self, next: TeamStatus) -> bool {
        use TeamStatus::*;
        matches!(
            (self, next),
            (Unpresented, CurrentlySelected)
                | (CurrentlySelected, Presented)
                | (CurrentlySelected, Unpresented)
        )
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamStatus::Unpresented => write!(f, "UNPRESENTED"),
            TeamStatus::CurrentlySelected => write!(f, "CURRENTLY_SELECTED"),
            TeamStatus::Presented => write!(f, "PRESENTED"),
        }
    }
}

/// Team name value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Between 1 and 100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    /// Validates and trims a team name
    ///
    /// # Example
    /// ```
    /// use teamdraw_api::domain::team::value_objects::TeamName;
    ///
    /// let name = TeamName::new("  Team A ").expect("valid name");
    /// assert_eq!(name.as_str(), "Team A");
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, TeamError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TeamError::NameRequired);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(TeamError::NameTooLong(MAX_NAME_LEN));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ordered list of team member names
///
/// # Invariants
/// - Between 1 and 20 members
/// - Each member is trimmed and between 1 and 100 characters
/// - Order is preserved as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Members(Vec<String>);

impl Members {
    pub fn new(members: Vec<String>) -> Result<Self, TeamError> {
        if members.is_empty() {
            return Err(TeamError::NoMembers);
        }
        if members.len() > MAX_MEMBERS {
            return Err(TeamError::TooManyMembers(MAX_MEMBERS));
        }

        let members = members
            .into_iter()
            .map(|member| {
                let member = member.trim();
                if member.is_empty() {
                    Err(TeamError::EmptyMember)
                } else if member.chars().count() > MAX_MEMBER_LEN {
                    Err(TeamError::MemberTooLong(MAX_MEMBER_LEN))
                } else {
                    Ok(member.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(members))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
