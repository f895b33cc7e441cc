//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Home page (public, session aware)
//! - `GET  /login`       - Login page
//! - `GET  /health`      - Health check: authentication service reachability
//! - `/api/auth/*`       - Login, session and logout JSON endpoints
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit::AuthRateLimitLayer, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter for `/api`; `None` disables limiting. When
///   set, the router must be served with connect info (see [`crate::server`])
pub fn app_router(state: AppState, rate_limit: Option<AuthRateLimitLayer>) -> NormalizePath<Router> {
    let api_router = api::routes::auth_routes();
    let api_router = match rate_limit {
        Some(layer) => api_router.layer(layer),
        None => api_router,
    };

    let router = Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
