//! DTOs for the link statistics list.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// All registry entries in insertion order.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub total: usize,
    pub items: Vec<LinkStatsItem>,
}

/// Statistics for a single link.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
    pub clicks: usize,
}
