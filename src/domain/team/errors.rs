use thiserror::Error;

use super::value_objects::TeamStatus;

/// Business rule violations on the Team aggregate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team name is required")]
    NameRequired,

    #[error("Team name must be at most {0} characters")]
    NameTooLong(usize),

    #[error("At least one team member is required")]
    NoMembers,

    #[error("Maximum {0} members per team")]
    TooManyMembers(usize),

    #[error("Member name cannot be empty")]
    EmptyMember,

    #[error("Member name must be at most {0} characters")]
    MemberTooLong(usize),

    #[error("Only a CURRENTLY_SELECTED team can be active (status is {0})")]
    InactiveStatus(TeamStatus),

    #[error("Cannot move team from {from} to {to}")]
    InvalidTransition { from: TeamStatus, to: TeamStatus },
}
