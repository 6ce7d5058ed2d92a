mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use quicklink::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "one", "https://example.com", "5").await;
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(json["checks"]["registry"]["message"], "1 links registered");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _clock, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("registry").is_some());
}

#[tokio::test]
async fn test_health_empty_registry_is_healthy() {
    let (state, _clock, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["registry"]["message"], "0 links registered");
}
