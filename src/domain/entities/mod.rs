//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without I/O concerns. Creation input
//! is modeled with a separate struct ([`NewShortUrl`]) so that store-assigned
//! fields (the surrogate id) never appear half-initialized.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
