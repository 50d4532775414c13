use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamChanges, TeamEvent, TeamStatus};

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub members: Vec<String>,
}

/// Request body for editing a team; omitted fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
    pub status: Option<TeamStatus>,
    pub active: Option<bool>,
}

/// Team as returned by every team endpoint
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<String>,
    pub status: TeamStatus,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            members: team.members().to_vec(),
            status: team.status(),
            active: team.is_active(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

/// Response from a reset
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    pub teams: Vec<TeamResponse>,
}

/// List all teams, ordered by name
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams().find_all().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Add a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiJson(req): ApiJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let (team, events) = Team::new(req.name, req.members)?;

    state.teams().create(&team).await?;
    events.iter().for_each(|event| event.record());

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Edit a team
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_repo = state.teams();
    let mut team = team_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    let event = team.apply_changes(TeamChanges {
        name: req.name,
        members: req.members,
        status: req.status,
        active: req.active,
    })?;

    team_repo.save(&team).await?;
    event.record();

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state.teams().delete(id).await?;
    TeamEvent::Deleted { team_id: id }.record();

    Ok(Json(json!({ "message": "Team deleted successfully" })))
}

/// The team currently up for presentation, or `null`
///
/// GET /api/teams/active
pub async fn active_team(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<Option<TeamResponse>>, ApiError> {
    let team = state.selection.active().await?;

    Ok(Json(team.as_ref().map(TeamResponse::from)))
}

/// Draw the next team
///
/// POST /api/teams/randomize
///
/// Responds with the drawn team, or `{"message": ..., "team": null}` once
/// every team has presented.
pub async fn randomize_team(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Response, ApiError> {
    state.limiters.check_randomize()?;

    let response = match state.selection.randomize().await? {
        Some(team) => Json(TeamResponse::from(&team)).into_response(),
        None => Json(json!({
            "message": "All teams have presented",
            "team": null,
        }))
        .into_response(),
    };

    Ok(response)
}

/// Return every team to the pool
///
/// POST /api/teams/reset
pub async fn reset_teams(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<ResetResponse>, ApiError> {
    let teams = state.selection.reset().await?;

    Ok(Json(ResetResponse {
        message: "All teams reset successfully",
        teams: teams.iter().map(TeamResponse::from).collect(),
    }))
}

/// Mark a team as presented
///
/// POST /api/teams/:id/confirm
pub async fn confirm_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.selection.confirm(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Put a team back in the pool
///
/// POST /api/teams/:id/skip
pub async fn skip_team(
    State(state): State<AppState>,
    _session: RequireSession,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.selection.skip(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}
