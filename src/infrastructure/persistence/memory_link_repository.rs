//! In-memory implementation of the link registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRecord, LinkRepository};
use crate::error::AppError;

/// Map from code to link that remembers insertion order.
#[derive(Debug, Default)]
struct Registry {
    order: Vec<String>,
    links: HashMap<String, Link>,
}

impl Registry {
    fn insert(&mut self, link: Link) -> Result<(), AppError> {
        if self.links.contains_key(&link.code) {
            return Err(AppError::ShortcodeCollision(link.code));
        }

        self.order.push(link.code.clone());
        self.links.insert(link.code.clone(), link);
        Ok(())
    }

    fn iter(&self) -> impl Iterator<Item = &Link> {
        self.order.iter().filter_map(|code| self.links.get(code))
    }
}

/// Registry held in process memory for the lifetime of the service.
///
/// Cloning shares the same underlying map. Every write takes the exclusive lock
/// for its whole check-then-write sequence; reads return cloned snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkRepository {
    registry: Arc<RwLock<Registry>>,
}

impl MemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = Link::from(new_link);

        self.registry.write().await.insert(link.clone())?;

        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.registry.read().await.links.contains_key(code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.registry.read().await.links.get(code).cloned())
    }

    async fn record_click(&self, code: &str, click: NewClick) -> Result<ClickRecord, AppError> {
        let mut registry = self.registry.write().await;

        let Some(link) = registry.links.get_mut(code) else {
            return Ok(ClickRecord::Missing);
        };

        if link.is_expired_at(click.clicked_at) {
            return Ok(ClickRecord::Expired(link.clone()));
        }

        link.clicks.push(click.into());
        Ok(ClickRecord::Recorded(link.clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.registry.read().await.iter().cloned().collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.registry.read().await.links.len())
    }
}
