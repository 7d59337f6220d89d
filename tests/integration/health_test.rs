//! Integration tests for the health endpoints and cross-cutting layers.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode, header};

#[tokio::test]
async fn test_banner() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Folder Structure Viewer API is running.");
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");
    assert_eq!(response.body["data"]["storeReachable"], true);
    assert!(response.body["data"]["uptimeSeconds"].is_u64());
    assert_eq!(response.body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_preflight_for_client_origin() {
    let app = helpers::TestApp::new();
    let origin = app.config.server.cors.allowed_origins[0].clone();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/folders")
        .header(header::ORIGIN, &origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        origin.as_str()
    );
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method("GET")
        .uri("/api/folders")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
