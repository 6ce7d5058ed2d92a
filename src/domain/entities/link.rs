//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::Click;
use crate::utils::short_link;

/// A registry entry: the target of a short code, its expiry and its click log.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Append-only, oldest first.
    pub clicks: Vec<Click>,
}

impl Link {
    /// Creates a link with an empty click log.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            clicks: Vec::new(),
        }
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }

    /// Display form of the short link, e.g. `http://localhost:3000/abc12`.
    pub fn short_url(&self, origin: &str) -> String {
        short_link::short_url(origin, &self.code)
    }
}

/// Input data for inserting a link into the registry.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(
            new_link.code,
            new_link.original_url,
            new_link.created_at,
            new_link.expires_at,
        )
    }
}
