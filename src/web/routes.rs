//! HTML view route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    redirect_handler, shortener_page_handler, shortener_submit_handler, stats_page_handler,
};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`        - Creation form
/// - `POST /`        - Form actions (add row, remove row, shorten)
/// - `GET  /stats`   - Stats table
/// - `GET  /{code}`  - Redirect to the original URL
///
/// Static segments win over `/{code}`, so a link whose code is `stats` or `health`
/// cannot be reached through a redirect.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(shortener_page_handler).post(shortener_submit_handler),
        )
        .route("/stats", get(stats_page_handler))
        .route("/{code}", get(redirect_handler))
}
