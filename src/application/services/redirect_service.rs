//! Short code resolution and click recording.

use std::sync::Arc;

use crate::domain::activity_log::ActivityLog;
use crate::domain::clock::Clock;
use crate::domain::entities::NewClick;
use crate::domain::repositories::{ClickRecord, LinkRepository};
use crate::error::AppError;

/// What a navigation to `/{code}` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The code is live; carries the target URL. A click has been recorded.
    Found(String),
    NotFound,
    Expired,
}

impl RedirectOutcome {
    /// Converts the failure outcomes into their [`AppError`] counterparts.
    pub fn into_result(self, code: &str) -> Result<String, AppError> {
        match self {
            Self::Found(url) => Ok(url),
            Self::NotFound => Err(AppError::NotFound(code.to_string())),
            Self::Expired => Err(AppError::Expired(code.to_string())),
        }
    }
}

pub struct RedirectService<L: LinkRepository> {
    repository: Arc<L>,
    clock: Arc<dyn Clock>,
    activity_log: ActivityLog,
}

impl<L: LinkRepository> RedirectService<L> {
    pub fn new(repository: Arc<L>, clock: Arc<dyn Clock>, activity_log: ActivityLog) -> Self {
        Self {
            repository,
            clock,
            activity_log,
        }
    }

    /// Resolves `code` at the current clock time.
    ///
    /// On a live code a click sourced from `referrer` (or `"direct"` when absent) is
    /// appended before returning. Missing and expired codes record nothing.
    ///
    /// # Errors
    ///
    /// Only registry failures are returned as errors; unknown and expired codes are
    /// ordinary outcomes.
    pub async fn resolve(
        &self,
        code: &str,
        referrer: Option<&str>,
    ) -> Result<RedirectOutcome, AppError> {
        let now = self.clock.now();
        let click = NewClick::from_referrer(now, referrer);

        let outcome = match self.repository.record_click(code, click).await? {
            ClickRecord::Recorded(link) => {
                self.activity_log.info(
                    now,
                    format!("Redirected {} to {}", code, link.original_url),
                );
                RedirectOutcome::Found(link.original_url)
            }
            ClickRecord::Missing => {
                self.activity_log
                    .warn(now, format!("Shortcode not found: {code}"));
                RedirectOutcome::NotFound
            }
            ClickRecord::Expired(_) => {
                self.activity_log
                    .warn(now, format!("Expired shortcode requested: {code}"));
                RedirectOutcome::Expired
            }
        };

        Ok(outcome)
    }
}
