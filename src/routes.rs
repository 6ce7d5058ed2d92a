//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Creation form
//! - `POST /`            - Creation form actions
//! - `GET  /stats`       - Stats table
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `/api/*`            - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (can be disabled)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `enable_rate_limit` - when `true`, requests are throttled per peer IP; the server
///   must then provide `ConnectInfo<SocketAddr>`
pub fn router(state: AppState, enable_rate_limit: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state);

    if enable_rate_limit {
        match rate_limit::layer() {
            Some(limiter) => router = router.layer(limiter),
            None => ::tracing::warn!("Rate limiter configuration invalid; rate limiting disabled"),
        }
    }

    router.layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so `/stats/` and
/// `/stats` reach the same handler.
pub fn app_router(state: AppState, enable_rate_limit: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, enable_rate_limit))
}
