//! Handler for the link statistics list.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::stats_list::{LinkStatsItem, StatsListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_link::short_url;

/// Lists every link with its click count.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// Expired links are included and flagged with `"expired": true`. Items come in
/// creation order.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsListResponse>, AppError> {
    let origin = state.origin(&headers);
    let now = state.clock.now();

    let items: Vec<LinkStatsItem> = state
        .stats_service
        .list_all()
        .await?
        .into_iter()
        .map(|summary| LinkStatsItem {
            short_url: short_url(&origin, &summary.code),
            expired: now >= summary.expires_at,
            code: summary.code,
            original_url: summary.original_url,
            created_at: summary.created_at,
            expires_at: summary.expires_at,
            clicks: summary.click_count,
        })
        .collect();

    Ok(Json(StatsListResponse {
        total: items.len(),
        items,
    }))
}
