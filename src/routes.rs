//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls/{shortcode}` - Resolve and redirect
//! - `GET  /shorturls`             - List all records, newest first
//! - `GET  /`                      - Liveness payload
//! - anything else                 - Plain-text 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for browser clients
//! - **Request log** - Durable JSON-lines log of every inbound request
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_handler, fallback_handler, list_handler, liveness_handler, resolve_handler,
};
use crate::api::middleware::{request_log, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(liveness_handler))
        .route("/shorturls", post(create_handler).get(list_handler))
        .route("/shorturls/{shortcode}", get(resolve_handler))
        .fallback(fallback_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_log::layer,
        ))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
