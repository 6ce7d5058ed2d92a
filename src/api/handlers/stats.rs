//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves a single link with its full click history.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Expired links are still
/// reported.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.get_link(&code).await?;
    let now = state.clock.now();

    Ok(Json(StatsResponse {
        short_url: link.short_url(&state.origin(&headers)),
        expired: link.is_expired_at(now),
        total: link.click_count(),
        code: link.code,
        original_url: link.original_url,
        created_at: link.created_at,
        expires_at: link.expires_at,
        items: link.clicks.into_iter().map(Into::into).collect(),
    }))
}
