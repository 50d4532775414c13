use axum::{
    http::{Method, Uri},
    Json,
};
use serde_json::{json, Value};

use crate::api::errors::ApiError;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Cannot {} {}", method, uri.path()))
}
