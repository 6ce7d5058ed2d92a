//! DTOs for the activity log endpoint.

use serde::Serialize;

use crate::domain::activity_log::LogEntry;

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub total: usize,
    pub items: Vec<LogEntry>,
}
