//! Application layer services implementing business logic.
//!
//! Services consume the registry trait and return plain outcomes, so the HTML views
//! and the JSON API share the same behavior.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Batch short link creation
//! - [`services::redirect_service::RedirectService`] - Code resolution and click recording
//! - [`services::stats_service::StatsService`] - Read-only registry statistics

pub mod services;
