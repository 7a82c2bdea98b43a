//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::log_event::RequestLogger;

/// Application state shared across all request handlers.
///
/// The request logger is carried here, not in a process global, so that its
/// lifecycle is bound to server start and shutdown.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ShortUrlService>,
    pub logger: RequestLogger,
}

impl AppState {
    pub fn new(service: Arc<ShortUrlService>, logger: RequestLogger) -> Self {
        Self { service, logger }
    }
}
