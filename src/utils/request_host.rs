//! Request base-URL reconstruction from HTTP headers.

use axum::http::{HeaderMap, header};

const FALLBACK_HOST: &str = "localhost:3000";

/// Reconstructs the externally visible base URL of the request.
///
/// The host (including any port) comes from the `Host` header; the scheme
/// from `X-Forwarded-Proto` when a reverse proxy supplies it, `http`
/// otherwise. Falls back to `localhost:3000` for clients that omit the
/// `Host` header entirely.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com".parse().unwrap());
///
/// assert_eq!(request_base_url(&headers), "http://s.example.com");
/// ```
pub fn request_base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(FALLBACK_HOST);

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{scheme}://{host}")
}
