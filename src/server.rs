//! HTTP server initialization and runtime setup.
//!
//! Wires the authentication gateway, session store and login service into
//! [`AppState`] and runs the Axum server until a shutdown signal arrives.

use crate::api::middleware::rate_limit;
use crate::application::services::LoginService;
use crate::config::Config;
use crate::infrastructure::auth::HttpAuthGateway;
use crate::infrastructure::session::{CookieSessionStore, SessionSettings};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the authentication service URL is invalid or the
/// HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let gateway = HttpAuthGateway::new(
        &config.auth_api_url,
        Duration::from_secs(config.auth_api_timeout_seconds),
    )?;

    let sessions = CookieSessionStore::new(SessionSettings {
        cookie_name: config.session_cookie_name.clone(),
        secret: config.session_secret.clone(),
        ttl_seconds: config.session_ttl_seconds,
        secure: config.cookie_secure,
    });

    let login_service = LoginService::new(
        Arc::new(gateway),
        Arc::new(sessions),
        config.demo_login_enabled(),
    );

    Ok(AppState::new(Arc::new(login_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - The rate limiter configuration is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    if config.demo_login_enabled() {
        tracing::warn!("Demo login is enabled; never run this configuration in production");
    }

    let limiter = if config.rate_limit_enabled {
        Some(rate_limit::auth_layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?)
    } else {
        None
    };

    let app = app_router(state, limiter);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
