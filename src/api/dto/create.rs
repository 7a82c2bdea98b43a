//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short URL.
///
/// All three fields are required by the contract, but they are modeled as
/// `Option` so that absence is reported as a missing-field error by the
/// handler instead of a bare deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten.
    pub url: Option<String>,

    /// Validity window in days, counted from creation.
    #[validate(range(min = 1, message = "validity must be at least 1 day"))]
    pub validity: Option<i64>,

    /// Client-chosen shortcode.
    #[validate(length(min = 4, max = 10, message = "shortcode must be 4-10 characters"))]
    pub shortcode: Option<String>,
}

/// Response for a successfully created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Fully-qualified short link built from the request's host and scheme.
    pub short_link: String,

    /// Expiry timestamp in RFC 3339 format.
    pub expiry: DateTime<Utc>,
}
