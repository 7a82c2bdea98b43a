//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses bound parameters for SQL injection protection. The `short_urls`
/// table carries the uniqueness constraint on `shortcode` and the CHECK
/// constraints that back the schema-level validation guard.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    shortcode: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.shortcode,
            row.original_url,
            row.created_at,
            row.expiry_date,
        )
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        // created_at is bound explicitly rather than left to the column
        // default: expiry_date must equal created_at + validity exactly.
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (shortcode, original_url, created_at, expiry_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, shortcode, original_url, created_at, expiry_date
            "#,
        )
        .bind(&new_url.shortcode)
        .bind(&new_url.original_url)
        .bind(new_url.created_at)
        .bind(new_url.expiry_date)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, shortcode, original_url, created_at, expiry_date
            FROM short_urls
            WHERE shortcode = $1
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortUrl::from))
    }

    async fn list_newest_first(&self) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, shortcode, original_url, created_at, expiry_date
            FROM short_urls
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }
}
