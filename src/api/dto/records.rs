//! DTO for the record listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// A full stored record, as returned by the listing endpoint.
///
/// The listing intentionally exposes raw records, store identity and both
/// timestamps included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlRecord {
    pub id: i64,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl From<ShortUrl> for ShortUrlRecord {
    fn from(record: ShortUrl) -> Self {
        Self {
            id: record.id,
            shortcode: record.shortcode,
            original_url: record.original_url,
            created_at: record.created_at,
            expiry_date: record.expiry_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_serializes_camel_case() {
        let now = Utc::now();
        let record = ShortUrlRecord::from(ShortUrl::new(
            3,
            "abcd".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::days(1),
        ));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["shortcode"], "abcd");
        assert_eq!(value["originalUrl"], "https://example.com");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("expiryDate").is_some());
    }
}
