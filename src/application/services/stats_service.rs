//! Read-only views over the registry.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// One row of the stats table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSummary {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: usize,
}

impl From<&Link> for LinkSummary {
    fn from(link: &Link) -> Self {
        Self {
            code: link.code.clone(),
            original_url: link.original_url.clone(),
            created_at: link.created_at,
            expires_at: link.expires_at,
            click_count: link.click_count(),
        }
    }
}

/// Service for reading registry statistics. Never mutates the registry.
pub struct StatsService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Summaries of every entry, expired ones included, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<LinkSummary>, AppError> {
        let links = self.repository.list().await?;
        Ok(links.iter().map(LinkSummary::from).collect())
    }

    /// Full entry for one code, including its click list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
