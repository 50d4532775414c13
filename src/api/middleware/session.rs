use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;
use crate::auth::session::token_from_headers;
use crate::domain::repositories::user_repository::{User, UserRepository};

/// Session guard for protected routes
///
/// Accepts the session cookie set by login, or the same token as
/// `Authorization: Bearer <token>`. Yields the logged-in user's id.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSession(user_id): RequireSession,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello user {}", user_id))
/// }
/// ```
pub struct RequireSession(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            ApiError::unauthorized("You must be logged in to access this resource")
        })?;

        let user = session_user(state, &token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Session is invalid or has expired"))?;

        Ok(RequireSession(user.id))
    }
}

/// Resolves a token to its user while the session is still live
///
/// `None` for a bad or expired token, a deleted user, or a session ended by
/// logout.
pub async fn session_user(state: &AppState, token: &str) -> Result<Option<User>, ApiError> {
    let claims = match verify_token(token, state.session.secret()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "rejected session token");
            return Ok(None);
        }
    };

    let user = state.users().find_by_id(claims.sub).await?;

    Ok(user.filter(|user| user.session_version == claims.ver))
}
