//! Handler for shortcode resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a shortcode and redirects to its original URL.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// Responds with 302 Found and a `Location` header. The status is built
/// explicitly: axum's redirect helpers emit 303/307/308, and the public
/// contract is 302.
///
/// # Errors
///
/// Returns 404 Not Found when the shortcode was never created, and
/// 410 Gone when the record exists but its expiry has passed.
pub async fn resolve_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.service.resolve(&shortcode).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}
