//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

/// Basic health check endpoint returns 200 OK with status and version
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
}

/// Liveness probe should always return 200 while the process runs
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "alive");
}

/// Health endpoints only accept GET
#[tokio::test]
async fn test_health_check_rejects_post() {
    let app = TestApp::new();

    let response = app.post_json("/health", "{}").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Unknown routes return 404
#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/definitely-not-a-route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
