//! Repository trait for the short link registry.

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an attempt to record a click against a code.
#[derive(Debug, Clone)]
pub enum ClickRecord {
    /// The link was live; the click was appended. Carries the updated link.
    Recorded(Link),
    /// No link under that code.
    Missing,
    /// The link exists but its expiry has passed; nothing was appended.
    Expired(Link),
}

/// Registry of short links keyed by code.
///
/// Implementations must keep insertion order for [`LinkRepository::list`] and must
/// make each write a single check-then-write step: [`LinkRepository::create`] never
/// overwrites and [`LinkRepository::record_click`] evaluates expiry and appends under
/// the same lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeCollision`] if the code is already taken.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns true if the code is a key in the registry, expired or not.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a link by its code, including expired ones.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Appends a click to the link if it exists and has not expired at
    /// `click.clicked_at`.
    async fn record_click(&self, code: &str, click: NewClick) -> Result<ClickRecord, AppError>;

    /// Snapshot of every link in insertion order.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Number of links in the registry.
    async fn count(&self) -> Result<usize, AppError>;
}
