mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Duration;
use quicklink::domain::repositories::LinkRepository;
use quicklink::domain::clock::Clock;
use quicklink::routes;
use quicklink::web::handlers::LOG_PANEL_LIMIT;

fn full_app(state: quicklink::AppState) -> TestServer {
    TestServer::new(routes::router(state, false)).unwrap()
}

fn row_count(html: &str) -> usize {
    html.matches("name=\"url\"").count()
}

#[tokio::test]
async fn test_creation_page_has_one_empty_row() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = full_app(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 1);
    assert!(html.contains("App Logs"));
}

#[tokio::test]
async fn test_add_row_until_five() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = full_app(state);

    let mut form: Vec<(&str, &str)> = Vec::new();
    for _ in 0..5 {
        form.extend([("url", ""), ("validity", ""), ("code", "")]);
    }
    form.push(("action", "add"));

    let response = server.post("/").form(&form).await;

    response.assert_status_ok();
    assert_eq!(row_count(&response.text()), 5);

    let response = server
        .post("/")
        .form(&[
            ("url", ""),
            ("validity", ""),
            ("code", ""),
            ("action", "add"),
        ])
        .await;
    assert_eq!(row_count(&response.text()), 2);
}

#[tokio::test]
async fn test_remove_row_keeps_last_one() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = full_app(state);

    let response = server
        .post("/")
        .form(&[
            ("url", "a"),
            ("validity", ""),
            ("code", ""),
            ("url", "b"),
            ("validity", ""),
            ("code", ""),
            ("action", "remove:0"),
        ])
        .await;
    assert_eq!(row_count(&response.text()), 1);
    assert!(response.text().contains("value=\"b\""));

    let response = server
        .post("/")
        .form(&[
            ("url", "only"),
            ("validity", ""),
            ("code", ""),
            ("action", "remove:0"),
        ])
        .await;
    assert_eq!(row_count(&response.text()), 1);
    assert!(response.text().contains("value=\"only\""));
}

#[tokio::test]
async fn test_shorten_form_success_resets_rows() {
    let (state, _clock, repo) = common::create_test_state();
    let server = full_app(state);

    let response = server
        .post("/")
        .form(&[
            ("url", "https://example.com"),
            ("validity", "1"),
            ("code", "abc12"),
            ("url", "https://example.org"),
            ("validity", ""),
            ("code", ""),
            ("action", "shorten"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("URLs shortened successfully!"));
    assert_eq!(row_count(&html), 1);
    assert!(html.contains("abc12"));
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_form_failure_keeps_rows() {
    let (state, _clock, repo) = common::create_test_state();
    let server = full_app(state);

    let response = server
        .post("/")
        .form(&[
            ("url", "nonsense"),
            ("validity", ""),
            ("code", "first"),
            ("url", "https://example.com"),
            ("validity", ""),
            ("code", "second"),
            ("action", "shorten"),
        ])
        .await;

    response.assert_status_bad_request();
    let html = response.text();
    assert!(html.contains("Invalid URL provided."));
    assert!(!html.contains("URLs shortened successfully!"));
    assert_eq!(row_count(&html), 2);

    assert!(!repo.exists("first").await.unwrap());
    assert!(repo.exists("second").await.unwrap());
}

#[tokio::test]
async fn test_stats_page_lists_links() {
    let (state, clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "live", "https://live.example", "10").await;
    common::create_test_link(&state, "gone", "https://gone.example", "1").await;
    let server = full_app(state);

    clock.advance(Duration::minutes(2));
    server.get("/live").await;

    let response = server.get("/stats").add_header("Host", common::HOST).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("href=\"/live\""));
    assert!(html.contains("href=\"/gone\""));
    assert!(html.contains("class=\"expired\""));
    assert!(html.contains("<td>1</td>"));
    assert!(html.find("live.example").unwrap() < html.find("gone.example").unwrap());
}

#[tokio::test]
async fn test_stats_route_wins_over_code() {
    let (state, _clock, _repo) = common::create_test_state();
    let server = full_app(state);

    let response = server.get("/stats").await;

    response.assert_status_ok();
    assert!(response.text().contains("No short links yet."));
}

#[tokio::test]
async fn test_full_router_redirect_and_health() {
    let (state, _clock, _repo) = common::create_test_state();
    common::create_test_link(&state, "abc12", "https://example.com", "1").await;
    let server = full_app(state);

    let response = server.get("/abc12").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

    server.get("/health").await.assert_status_ok();
    server.get("/api/stats/abc12").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, _clock, _repo) = common::create_test_state();
    let app = axum::Router::new().fallback_service(routes::app_router(state, false));
    let server = TestServer::new(app).unwrap();

    server.get("/stats/").await.assert_status_ok();
}

#[tokio::test]
async fn test_code_with_reserved_characters_is_reachable() {
    let (state, _clock, repo) = common::create_test_state();
    common::create_test_link(&state, "a/b?c", "https://example.com/odd", "5").await;
    let server = full_app(state);

    let html = server
        .get("/stats")
        .add_header("Host", common::HOST)
        .await
        .text();
    assert!(html.contains("href=\"/a%2Fb%3Fc\""));
    assert!(html.contains("http://sho.rt/a%2Fb%3Fc"));

    let response = server.get("/a%2Fb%3Fc").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/odd");

    let link = repo.find_by_code("a/b?c").await.unwrap().unwrap();
    assert_eq!(link.click_count(), 1);
}

#[tokio::test]
async fn test_log_panel_shows_newest_entries_only() {
    let (state, clock, _repo) = common::create_test_state();
    let total = LOG_PANEL_LIMIT + 10;
    for i in 0..total {
        state.activity_log.info(clock.now(), format!("note {i}"));
    }
    let server = full_app(state);

    let html = server.get("/").await.text();
    assert!(html.contains(&format!("note {}</li>", total - 1)));
    assert!(html.contains("note 10</li>"));
    assert!(!html.contains("note 9</li>"));

    let json = server.get("/api/logs").await.json::<serde_json::Value>();
    assert_eq!(json["total"], total);
}
