//! Short URL entity representing a shortcode-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short URL record.
///
/// Maps a client-chosen shortcode to its original URL. Records are immutable
/// after creation: they are read for resolution and listing, and expiry is
/// enforced at read time rather than by deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shortcode,
            original_url,
            created_at,
            expiry_date,
        }
    }

    /// Returns true if the record has passed its expiry time.
    ///
    /// The comparison is strict: a record resolved at exactly its expiry
    /// instant is still live.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiry_date
    }
}

/// Input data for creating a new short URL.
///
/// Both timestamps are supplied by the caller so that
/// `expiry_date == created_at + validity days` holds exactly.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}
