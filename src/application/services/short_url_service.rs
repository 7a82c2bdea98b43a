//! Short URL creation, resolution, and listing service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::url_pattern::is_valid_url;

/// Validated input for creating a short URL.
#[derive(Debug, Clone)]
pub struct CreateShortUrl {
    pub url: String,
    pub validity_days: i64,
    pub shortcode: String,
}

/// Service for creating, resolving, and listing short URLs.
///
/// Expiry is computed here so that both timestamps of a record derive from
/// the same clock sample; the repository persists them verbatim.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShortUrlService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short URL record.
    ///
    /// There is no pre-insert existence check: the insert is atomic and the
    /// store's uniqueness constraint arbitrates racing creates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails the syntactic check
    /// or the validity period cannot be represented as a timestamp.
    /// Returns [`AppError::Conflict`] if the shortcode is already taken.
    pub async fn create(&self, input: CreateShortUrl) -> Result<ShortUrl, AppError> {
        if !is_valid_url(&input.url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "url": input.url }),
            ));
        }

        let created_at = Utc::now();
        let expiry_date = Duration::try_days(input.validity_days)
            .and_then(|d| created_at.checked_add_signed(d))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Validity period out of range",
                    json!({ "validity": input.validity_days }),
                )
            })?;

        self.repository
            .insert(NewShortUrl {
                shortcode: input.shortcode,
                original_url: input.url,
                created_at,
                expiry_date,
            })
            .await
    }

    /// Resolves a shortcode to its stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches, and
    /// [`AppError::Gone`] if the record exists but has expired. Expired
    /// records stay in the store; resolution keeps reporting expiry until an
    /// external process prunes them.
    pub async fn resolve(&self, shortcode: &str) -> Result<ShortUrl, AppError> {
        let record = self
            .repository
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortcode": shortcode }))
            })?;

        if record.is_expired() {
            return Err(AppError::gone(
                "Short URL has expired",
                json!({
                    "shortcode": shortcode,
                    "expiryDate": record.expiry_date.to_rfc3339(),
                }),
            ));
        }

        Ok(record)
    }

    /// Lists every record, newest first.
    pub async fn list(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_newest_first().await
    }
}
