//! DTO for the liveness endpoint.

use serde::Serialize;

/// Liveness payload served at the service root.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: String,
}
