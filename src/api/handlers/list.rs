//! Handler for the record listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::records::ShortUrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored record, newest first.
///
/// # Endpoint
///
/// `GET /shorturls`
///
/// Expired records are included; expiry is a read-time property of
/// resolution, not of listing. The result set is unbounded.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortUrlRecord>>, AppError> {
    let records = state.service.list().await?;

    Ok(Json(
        records.into_iter().map(ShortUrlRecord::from).collect(),
    ))
}
