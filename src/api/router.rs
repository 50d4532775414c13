use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, health, teams};
use crate::api::middleware::rate_limit::limit_api_requests;
use crate::api::state::AppState;

/// Builds the full HTTP surface
///
/// Every `/api/teams` route and `/api/auth/me` require a session. Every
/// `/api` route counts against the per-client request quota; the server must
/// be run with connect info so the client address is known.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/active", get(teams::active_team))
        .route("/api/teams/randomize", post(teams::randomize_team))
        .route("/api/teams/reset", post(teams::reset_teams))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/api/teams/:id/confirm", post(teams::confirm_team))
        .route("/api/teams/:id/skip", post(teams::skip_team))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            limit_api_requests,
        ));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .merge(api)
        .fallback(health::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the browser front end, which sends the session cookie
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
