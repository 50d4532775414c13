// Extractors whose rejections use the API error body

use axum::extract::{FromRequest, FromRequestParts};

use crate::api::errors::ApiError;

/// `axum::Json` with rejections reported as `ValidationError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections reported as `ValidationError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
