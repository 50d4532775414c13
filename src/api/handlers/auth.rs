use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::middleware::{session_user, RequireSession};
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{clear_session_cookie, session_cookie, token_from_headers};
use crate::domain::repositories::user_repository::{User, UserRepository};
use crate::domain::user::value_objects::{validate_password, Username};

/// Request body for registration and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: User,
    /// Same token as the session cookie, for clients that send Bearer headers
    pub token: String,
}

type SetCookie = [(header::HeaderName, String); 1];

/// Register a new operator
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    state.limiters.check_auth(client.ip())?;

    let username = Username::new(&req.username)?;
    validate_password(&req.password)?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User::new(username, password_hash);
    state.users().create(&user).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully",
            user,
        }),
    ))
}

/// Login with username and password, starting a session
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<(SetCookie, Json<LoginResponse>), ApiError> {
    state.limiters.check_auth(client.ip())?;
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let invalid = || ApiError::unauthorized("Invalid username or password");

    // A name that could never have registered cannot match a stored user.
    let username = Username::new(&req.username).map_err(|_| invalid())?;
    let user = state
        .users()
        .find_by_username(&username)
        .await?
        .ok_or_else(invalid)?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;
    if !valid {
        return Err(invalid());
    }

    let session = &state.session;
    let token = create_token(user.id, user.session_version, session.secret(), session.ttl())
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create session: {}", e)))?;
    let cookie = session_cookie(
        &token,
        session.ttl().num_seconds(),
        session.secure_cookies(),
    );

    tracing::info!(user_id = %user.id, "user logged in");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful",
            user,
            token,
        }),
    ))
}

/// End the session
///
/// POST /api/auth/logout
///
/// Ends every session of the user the token belongs to, whether it was sent
/// as the cookie or as a Bearer header, and clears the cookie. Always
/// succeeds, even without a session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> (SetCookie, Json<Value>) {
    if let Err(e) = end_session(&state, &headers).await {
        tracing::warn!(error = %e.message, "failed to end session on logout");
    }

    (
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.session.secure_cookies()),
        )],
        Json(json!({ "message": "Logout successful" })),
    )
}

/// The logged-in operator
///
/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireSession(user_id): RequireSession,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Session user no longer exists"))?;

    Ok(Json(user))
}

async fn end_session(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(token) = token_from_headers(headers) else {
        return Ok(());
    };

    if let Some(user) = session_user(state, &token).await? {
        state.users().end_sessions(user.id).await?;
        tracing::info!(user_id = %user.id, "user logged out");
    }

    Ok(())
}
