//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry trait definitions
//! - [`clock`] - Time source used for expiry and click timestamps
//! - [`activity_log`] - Display-only event log
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{code}`
//! 2. [`crate::application::services::RedirectService`] asks the registry to record a
//!    click at the current [`clock::Clock`] time
//! 3. The registry checks existence and expiry and appends the click in one step
//! 4. The handler answers with a redirect, or the creation view with an error

pub mod activity_log;
pub mod clock;
pub mod entities;
pub mod repositories;
