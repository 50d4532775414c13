use thiserror::Error;

/// Validation failures for user registration and login input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Username must be at most {0} characters")]
    UsernameTooLong(usize),

    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharacters,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password must be at most {0} characters")]
    PasswordTooLong(usize),
}
