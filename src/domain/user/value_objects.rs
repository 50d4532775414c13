use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::UserError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 100;

/// Username value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - 3-50 characters
/// - Only ASCII letters, digits and underscores
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use teamdraw_api::domain::user::value_objects::Username;
    ///
    /// let username = Username::new(" admin ").expect("valid username");
    /// assert_eq!(username.as_str(), "admin");
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserError> {
        let username = username.as_ref().trim();
        let len = username.chars().count();

        if len < MIN_USERNAME_LEN {
            return Err(UserError::UsernameTooShort(MIN_USERNAME_LEN));
        }
        if len > MAX_USERNAME_LEN {
            return Err(UserError::UsernameTooLong(MAX_USERNAME_LEN));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(UserError::UsernameCharacters);
        }

        Ok(Username(username.to_string()))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks a plaintext password against the registration policy (6-100 characters)
pub fn validate_password(password: &str) -> Result<(), UserError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(UserError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(UserError::PasswordTooLong(MAX_PASSWORD_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username() {
        assert!(Username::new("admin").is_ok());
        assert!(Username::new("team_lead_2").is_ok());
    }

    #[test]
    fn username_is_trimmed() {
        assert_eq!(Username::new("  admin ").unwrap().as_str(), "admin");
    }

    #[test]
    fn username_too_short() {
        assert_eq!(Username::new("ab"), Err(UserError::UsernameTooShort(3)));
        assert_eq!(Username::new("   "), Err(UserError::UsernameTooShort(3)));
    }

    #[test]
    fn username_too_long() {
        assert!(Username::new("a".repeat(50)).is_ok());
        assert_eq!(
            Username::new("a".repeat(51)),
            Err(UserError::UsernameTooLong(50))
        );
    }

    #[test]
    fn username_rejects_symbols() {
        assert_eq!(Username::new("ad min"), Err(UserError::UsernameCharacters));
        assert_eq!(Username::new("admin!"), Err(UserError::UsernameCharacters));
        assert_eq!(Username::new("ádmin"), Err(UserError::UsernameCharacters));
    }

    #[test]
    fn username_display() {
        let username = Username::new("admin").unwrap();
        assert_eq!(format!("{}", username), "admin");
    }

    #[test]
    fn password_policy() {
        assert!(validate_password("secret").is_ok());
        assert_eq!(validate_password("12345"), Err(UserError::PasswordTooShort(6)));
        assert!(validate_password(&"p".repeat(100)).is_ok());
        assert_eq!(
            validate_password(&"p".repeat(101)),
            Err(UserError::PasswordTooLong(100))
        );
    }
}
