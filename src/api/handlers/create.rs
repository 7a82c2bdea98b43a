//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::application::services::CreateShortUrl;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_base_url;

/// Creates a short URL from a long URL, a validity window, and a
/// client-chosen shortcode.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "validity": 1,
///   "shortcode": "abcd"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "http://s.example.com/abcd",
///   "expiry": "2025-06-02T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when a field is missing, the URL is malformed,
/// the shortcode length is outside 4-10, or the validity is below 1 day.
/// Returns 409 Conflict when the shortcode is already taken.
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<Json<CreateShortUrlResponse>, AppError> {
    let (Some(url), Some(validity), Some(shortcode)) = (
        payload.url.clone(),
        payload.validity,
        payload.shortcode.clone(),
    ) else {
        return Err(AppError::bad_request(
            "Missing required fields: url, validity, shortcode",
            json!({
                "url": payload.url.is_some(),
                "validity": payload.validity.is_some(),
                "shortcode": payload.shortcode.is_some(),
            }),
        ));
    };

    payload.validate()?;

    let record = state
        .service
        .create(CreateShortUrl {
            url,
            validity_days: validity,
            shortcode,
        })
        .await?;

    let short_link = format!("{}/{}", request_base_url(&headers), record.shortcode);

    Ok(Json(CreateShortUrlResponse {
        short_link,
        expiry: record.expiry_date,
    }))
}
