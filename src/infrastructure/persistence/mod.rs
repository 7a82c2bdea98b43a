//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_short_url_repository;

pub use pg_short_url_repository::PgShortUrlRepository;
