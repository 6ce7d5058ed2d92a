//! DTOs for detailed link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;

/// Detailed statistics for a specific short link, with every click.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
    pub total: usize,
    pub items: Vec<ClickInfo>,
}
