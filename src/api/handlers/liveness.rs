//! Liveness and fallback handlers.

use axum::{Json, http::StatusCode, http::Uri};

use crate::api::dto::liveness::LivenessResponse;

/// Liveness payload at the service root.
///
/// # Endpoint
///
/// `GET /`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "URL Shortener API is running!".to_string(),
    })
}

/// Plain-text 404 for unmatched routes.
pub async fn fallback_handler(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Route {uri} not found."))
}
