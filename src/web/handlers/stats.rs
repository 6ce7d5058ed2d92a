//! Stats view handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap};

use crate::domain::activity_log::LogEntry;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_link::{code_path, short_url};

use super::LOG_PANEL_LIMIT;

/// One line of the stats table.
#[derive(Debug, Clone)]
pub struct StatsRow {
    pub code: String,
    /// Percent-encoded path of the redirect route.
    pub path: String,
    pub short_url: String,
    pub original_url: String,
    pub expires_at: String,
    pub expired: bool,
    pub clicks: usize,
}

/// Template for the stats page.
///
/// Renders `templates/stats.html`: one table row per link, in creation order.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub rows: Vec<StatsRow>,
    pub logs: Vec<LogEntry>,
}

/// Renders the statistics table.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatsTemplate, AppError> {
    let origin = state.origin(&headers);
    let now = state.clock.now();

    let rows = state
        .stats_service
        .list_all()
        .await?
        .into_iter()
        .map(|summary| StatsRow {
            path: code_path(&summary.code),
            short_url: short_url(&origin, &summary.code),
            expires_at: summary.expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            expired: now >= summary.expires_at,
            code: summary.code,
            original_url: summary.original_url,
            clicks: summary.click_count,
        })
        .collect();

    Ok(StatsTemplate {
        rows,
        logs: state.activity_log.recent(LOG_PANEL_LIMIT),
    })
}
