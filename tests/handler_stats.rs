mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::Duration;
use quicklink::api::handlers::{logs_handler, stats_handler, stats_list_handler};
use quicklink::web::handlers::redirect_handler;

fn stats_app(state: quicklink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/stats", get(stats_list_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/api/logs", get(logs_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_list_empty() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = stats_app(state);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_stats_list_order_and_clicks() {
    let (state, _clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "zeta", "https://z.example", "5").await;
    common::create_test_link(&state, "alpha", "https://a.example", "5").await;
    let server = stats_app(state);

    server.get("/alpha").await;
    server.get("/alpha").await;

    let response = server
        .get("/api/stats")
        .add_header("Host", common::HOST)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["code"], "zeta");
    assert_eq!(json["items"][0]["clicks"], 0);
    assert_eq!(json["items"][1]["code"], "alpha");
    assert_eq!(json["items"][1]["clicks"], 2);
    assert_eq!(json["items"][1]["short_url"], "http://sho.rt/alpha");
    assert_eq!(json["items"][1]["expired"], false);
}

#[tokio::test]
async fn test_stats_list_includes_expired() {
    let (state, clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "short", "https://example.com", "1").await;
    let server = stats_app(state);

    clock.advance(Duration::minutes(2));

    let json = server.get("/api/stats").await.json::<serde_json::Value>();
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["expired"], true);
}

#[tokio::test]
async fn test_stats_detail_with_clicks() {
    let (state, _clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "detail", "https://example.com", "5").await;
    let server = stats_app(state);

    server
        .get("/detail")
        .add_header("Referer", "https://ref.example")
        .await;
    server.get("/detail").await;

    let response = server.get("/api/stats/detail").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "detail");
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["source"], "https://ref.example");
    assert_eq!(json["items"][1]["source"], "direct");
    assert_eq!(json["items"][0]["clicked_at"], "2025-01-01T12:00:00Z");
}

#[tokio::test]
async fn test_stats_detail_not_found() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = stats_app(state);

    let response = server.get("/api/stats/unknown").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_logs_record_activity() {
    let (state, _clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "logged", "https://example.com", "5").await;
    let server = stats_app(state);

    server.get("/logged").await;
    server.get("/ghost").await;

    let response = server.get("/api/logs").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let messages: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["message"].as_str().unwrap())
        .collect();

    assert_eq!(
        messages,
        vec![
            "Shortened https://example.com -> logged",
            "URLs shortened successfully!",
            "Redirected logged to https://example.com",
            "Shortcode not found: ghost",
        ]
    );
    assert_eq!(json["items"][3]["level"], "warn");
    assert_eq!(json["total"], 4);
}
