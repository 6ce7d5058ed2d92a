//! Process-wide activity log shown alongside every page.
//!
//! The log is display-only: an append-only list of human-readable entries with no
//! external contract. Each entry is also emitted through `tracing` so it lands in
//! the service logs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// Shared handle to the activity log. Cloning shares the same list.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, timestamp: DateTime<Utc>, message: impl Into<String>) {
        self.push(timestamp, LogLevel::Info, message.into());
    }

    pub fn warn(&self, timestamp: DateTime<Utc>, message: impl Into<String>) {
        self.push(timestamp, LogLevel::Warn, message.into());
    }

    pub fn error(&self, timestamp: DateTime<Utc>, message: impl Into<String>) {
        self.push(timestamp, LogLevel::Error, message.into());
    }

    fn push(&self, timestamp: DateTime<Utc>, level: LogLevel, message: String) {
        match level {
            LogLevel::Info => tracing::info!(target: "activity", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "activity", "{message}"),
            LogLevel::Error => tracing::error!(target: "activity", "{message}"),
        }

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEntry {
                timestamp,
                level,
                message,
            });
    }

    /// Copy of all entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Copy of the newest `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let start = entries.len().saturating_sub(limit);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
