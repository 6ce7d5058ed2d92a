//! API route configuration.

use crate::api::handlers::{logs_handler, shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create shortened URLs (1 to 5 per request)
/// - `GET  /stats`          - Every link with its click count
/// - `GET  /stats/{code}`   - One link with its click history
/// - `GET  /logs`           - Activity log entries
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/logs", get(logs_handler))
}
