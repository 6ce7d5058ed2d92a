//! Handler for the activity log.

use axum::{Json, extract::State};

use crate::api::dto::logs::LogsResponse;
use crate::state::AppState;

/// Returns every activity log entry, oldest first.
///
/// # Endpoint
///
/// `GET /api/logs`
pub async fn logs_handler(State(state): State<AppState>) -> Json<LogsResponse> {
    let items = state.activity_log.entries();

    Json(LogsResponse {
        total: items.len(),
        items,
    })
}
