//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Source recorded when a redirect carries no referrer.
pub const DIRECT_SOURCE: &str = "direct";

/// A successful redirect through a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    /// The `Referer` of the redirect request, or [`DIRECT_SOURCE`].
    pub source: String,
}

impl Click {
    pub fn new(clicked_at: DateTime<Utc>, source: String) -> Self {
        Self { clicked_at, source }
    }
}

/// Input data for recording a click.
///
/// The timestamp doubles as the instant the expiry check is evaluated at.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub clicked_at: DateTime<Utc>,
    pub source: String,
}

impl NewClick {
    /// Builds a click from an optional referrer; blank or missing means `"direct"`.
    pub fn from_referrer(clicked_at: DateTime<Utc>, referrer: Option<&str>) -> Self {
        let source = referrer
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DIRECT_SOURCE)
            .to_string();

        Self { clicked_at, source }
    }
}

impl From<NewClick> for Click {
    fn from(new_click: NewClick) -> Self {
        Click::new(new_click.clicked_at, new_click.source)
    }
}
