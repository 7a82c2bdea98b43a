mod common;

use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_liveness_payload() {
    let (state, _repo, _log_rx) = common::create_test_state();
    let server = TestServer::new(common::build_app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "URL Shortener API is running!");
}

#[tokio::test]
async fn test_unmatched_route_is_plain_text_404() {
    let (state, _repo, _log_rx) = common::create_test_state();
    let server = TestServer::new(common::build_app(state)).unwrap();

    let response = server.get("/definitely/not/here").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(body.contains("Route"));
    assert!(body.contains("/definitely/not/here"));
    assert!(body.contains("not found"));
}

#[tokio::test]
async fn test_unmatched_route_is_logged() {
    let (state, _repo, mut log_rx) = common::create_test_state();
    let server = TestServer::new(common::build_app(state)).unwrap();

    server.get("/nope").await;

    let entry = log_rx.try_recv().unwrap();
    assert_eq!(entry.message, "Incoming request");
    assert_eq!(entry.data["path"], "/nope");
}

#[tokio::test]
async fn test_liveness_logs_user_agent() {
    let (state, _repo, mut log_rx) = common::create_test_state();
    let server = TestServer::new(common::build_app(state)).unwrap();

    server.get("/").add_header("User-Agent", "TestBot/1.0").await;

    let entry = log_rx.try_recv().unwrap();
    assert_eq!(entry.data["userAgent"], "TestBot/1.0");
}
