//! Request logging middleware.
//!
//! Emits one durable log entry per inbound request through the injected
//! [`crate::domain::log_event::RequestLogger`], and an additional error
//! entry when the response is a server fault. Emission is non-blocking and
//! can never fail the request.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde_json::json;
use std::net::SocketAddr;

use crate::state::AppState;

pub async fn layer(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    state.logger.info(
        "Incoming request",
        json!({
            "method": method,
            "path": path,
            "ip": addr.ip().to_string(),
            "userAgent": user_agent,
        }),
    );

    let response = next.run(req).await;

    if response.status().is_server_error() {
        state.logger.error(
            "Request failed",
            json!({
                "method": method,
                "path": path,
                "status": response.status().as_u16(),
            }),
        );
    }

    response
}
