//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short URL store.
///
/// The store contract is deliberately narrow: an atomic insert guarded by a
/// uniqueness constraint on `shortcode`, an exact-match lookup, and a sorted
/// listing. Everything else (expiry interpretation, validation) lives in the
/// service layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new short URL record.
    ///
    /// The insert is atomic: uniqueness of `shortcode` is enforced by the
    /// store, and a constraint violation is reported as a conflict. Callers
    /// must not pre-check existence; under concurrent creates the store's
    /// rejection of the second insert is the source of truth.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the shortcode already exists.
    /// Returns [`AppError::Validation`] if a schema-level constraint rejects
    /// the values. Returns [`AppError::Internal`] on other store errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found (expired records included)
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists every record ordered by `created_at` descending.
    ///
    /// The result set is unbounded; the service exposes no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_newest_first(&self) -> Result<Vec<ShortUrl>, AppError>;
}
