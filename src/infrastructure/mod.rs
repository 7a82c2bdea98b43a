//! Infrastructure layer for external integrations.
//!
//! Implements the data-access traits defined by the domain layer.

pub mod persistence;
