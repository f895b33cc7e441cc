//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Governor layer keyed by peer IP.
pub type AuthRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter for the `/api/auth` routes.
///
/// # Limits
///
/// - **Rate**: one token replenished every `1 / per_second` seconds
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits apply per client IP taken from the socket peer address, so the
/// router must be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn auth_layer(per_second: u64, burst: u32) -> Result<AuthRateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
