//! # Quicklink
//!
//! A small URL shortener built with Axum. Short links, their expiry and their click
//! history live in memory for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the registry trait, clock and activity log
//! - **Application Layer** ([`application`]) - Shortening, redirect and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML creation form, stats table and redirects
//!
//! ## Features
//!
//! - Batches of up to five URLs with optional custom codes and validity windows
//! - Click tracking with referrer on every redirect
//! - Expiry evaluated on every lookup
//! - Activity log shown on every page and served as JSON
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CreationRequest, LinkService, RedirectOutcome, RedirectService, StatsService,
    };
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkRepository;
    pub use crate::state::AppState;
}
