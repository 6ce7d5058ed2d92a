//! Shared application state injected into every handler.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::activity_log::ActivityLog;
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::persistence::MemoryLinkRepository;
use crate::utils::extract_origin::resolve_origin;

/// Services and shared handles, cheap to clone per request.
///
/// All services operate on the same registry and write to the same activity log.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub redirect_service: Arc<RedirectService<MemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<MemoryLinkRepository>>,
    pub activity_log: ActivityLog,
    pub clock: Arc<dyn Clock>,
    /// Configured origin for short links; derived per request when unset.
    pub public_origin: Option<String>,
}

impl AppState {
    /// Wires the services around one registry, one clock and one activity log.
    pub fn new(
        repository: Arc<MemoryLinkRepository>,
        clock: Arc<dyn Clock>,
        public_origin: Option<String>,
    ) -> Self {
        let activity_log = ActivityLog::new();

        Self {
            link_service: Arc::new(LinkService::new(
                repository.clone(),
                clock.clone(),
                activity_log.clone(),
            )),
            redirect_service: Arc::new(RedirectService::new(
                repository.clone(),
                clock.clone(),
                activity_log.clone(),
            )),
            stats_service: Arc::new(StatsService::new(repository)),
            activity_log,
            clock,
            public_origin,
        }
    }

    /// Fresh registry on the system clock.
    pub fn in_memory(public_origin: Option<String>) -> Self {
        Self::new(
            Arc::new(MemoryLinkRepository::new()),
            Arc::new(SystemClock),
            public_origin,
        )
    }

    /// Origin short links are displayed under for this request.
    pub fn origin(&self, headers: &HeaderMap) -> String {
        resolve_origin(self.public_origin.as_deref(), headers)
    }
}
