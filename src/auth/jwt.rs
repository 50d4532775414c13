// Session token creation and verification
// Tokens are HS256 JWTs carrying the operator's user id and session version

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `ver` - The user's session version when the token was issued
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Session version; logout bumps the stored one
    pub ver: i64,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a session token for a user
///
/// # Example
/// ```
/// use chrono::Duration;
/// use teamdraw_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, 0, "secret", Duration::hours(24)).expect("valid token");
/// let claims = verify_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// assert_eq!(claims.ver, 0);
/// ```
pub fn create_token(
    user_id: Uuid,
    session_version: i64,
    secret: &str,
    ttl: Duration,
) -> Result<String, String> {
    let expiry = Utc::now() + ttl;
    let claims = Claims {
        sub: user_id,
        ver: session_version,
        exp: expiry.timestamp().max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a session token
///
/// Fails on a bad signature, a malformed token, or an expired one.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, 3, TEST_SECRET, Duration::hours(24)).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.ver, 3);
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(Uuid::new_v4(), 0, TEST_SECRET, Duration::hours(1)).expect("valid token");

        let result = verify_token(&token, "wrong-secret");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_token_fails() {
        let result = verify_token("invalid.token.string", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn expired_token_fails() {
        // Well beyond the default 60 second leeway
        let token = create_token(Uuid::new_v4(), 0, TEST_SECRET, Duration::hours(-1)).expect("valid token");

        assert!(verify_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn token_expiry_follows_ttl() {
        let token = create_token(Uuid::new_v4(), 0, TEST_SECRET, Duration::hours(24)).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expiry_time = claims.exp as i64;
        let in_24_hours = (Utc::now() + Duration::hours(24)).timestamp();

        assert!(expiry_time > Utc::now().timestamp());
        assert!(expiry_time <= in_24_hours + 10); // 10 second buffer
    }
}
