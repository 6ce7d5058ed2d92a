//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Sustained requests per second allowed for one client IP.
const PER_SECOND: u64 = 2;

/// Requests a client may burst before throttling starts.
const BURST_SIZE: u32 = 100;

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the per-IP rate limiter applied to every route.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the socket peer
/// address, so the server must be started with connect info.
///
/// Returns `None` if the limits do not form a valid quota.
///
/// # Example
///
/// ```rust,ignore
/// let mut app = Router::new().route("/", get(index));
/// if let Some(limiter) = rate_limit::layer() {
///     app = app.layer(limiter);
/// }
/// ```
pub fn layer() -> Option<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}
