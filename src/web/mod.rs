//! Web layer for the browser-based UI.
//!
//! Provides the creation form, the stats table and the redirect page.
//! Uses Askama templates for server-side rendering; every page shows the
//! activity log.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - View route configuration

pub mod handlers;
pub mod routes;
