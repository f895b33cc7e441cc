//! Login orchestration: authentication service call, demo fallback and session persistence.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::domain::entities::{Credentials, SessionCookie, SessionData, User};
use crate::domain::gateways::{AuthGateway, SessionStore};
use crate::error::AppError;

/// Demo credentials accepted when the demo login is enabled.
pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_TOKEN: &str = "mock-token-for-demo";

/// Fixed user returned by the demo login.
pub fn demo_user() -> User {
    User::new(1, "مدیر سیستم", DEMO_EMAIL, "admin")
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub cookie: SessionCookie,
}

/// Service behind `POST /api/auth/login` and the session endpoints.
pub struct LoginService {
    gateway: Arc<dyn AuthGateway>,
    sessions: Arc<dyn SessionStore>,
    demo_login_enabled: bool,
}

impl LoginService {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `gateway` - remote authentication service
    /// - `sessions` - session persistence
    /// - `demo_login_enabled` - accept the demo pair when the gateway rejects a login;
    ///   only ever `true` in development
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        sessions: Arc<dyn SessionStore>,
        demo_login_enabled: bool,
    ) -> Self {
        Self {
            gateway,
            sessions,
            demo_login_enabled,
        }
    }

    pub fn demo_login_enabled(&self) -> bool {
        self.demo_login_enabled
    }

    /// Authenticates the credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with a localized message if the
    /// authentication service rejects the login (and the demo fallback does
    /// not apply).
    ///
    /// Returns [`AppError::Internal`] if the session cannot be persisted. A storage
    /// failure is never retried as a demo login.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, AppError> {
        tracing::info!(email = %credentials.email, "Login attempt");

        match self.gateway.login(credentials).await {
            Ok(auth) => {
                tracing::info!(user_id = %auth.user.id, "Authentication successful");

                let session = SessionData::logged_in(auth.user, auth.token.access_token);
                let cookie = self.persist(&session).await?;
                tracing::info!(user_id = %session.user.id, "Session created");

                Ok(LoginOutcome {
                    user: session.user,
                    cookie,
                })
            }
            Err(failure) => {
                if self.demo_login_enabled && credentials.matches(DEMO_EMAIL, DEMO_PASSWORD) {
                    tracing::warn!(error = %failure, "Demo login used for development");
                    return self.demo_login().await;
                }

                let message = failure.user_message();
                tracing::warn!(
                    email = %credentials.email,
                    error = %failure,
                    message = %message,
                    "Authentication failed"
                );
                Err(AppError::unauthorized(message))
            }
        }
    }

    /// Returns the session attached to the request, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    pub async fn current_session(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<SessionData>, AppError> {
        let session = self.sessions.load_session(headers).await?;
        Ok(session.filter(|s| s.is_logged_in))
    }

    /// Returns the cookie that ends the browser session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    pub async fn logout(&self) -> Result<SessionCookie, AppError> {
        self.sessions.destroy_session().await
    }

    /// Returns whether the authentication service is reachable.
    pub async fn auth_api_reachable(&self) -> bool {
        self.gateway.health_check().await
    }

    async fn demo_login(&self) -> Result<LoginOutcome, AppError> {
        let session = SessionData::logged_in(demo_user(), DEMO_TOKEN);
        let cookie = self.persist(&session).await?;
        tracing::info!("Demo session created");

        Ok(LoginOutcome {
            user: session.user,
            cookie,
        })
    }

    async fn persist(&self, session: &SessionData) -> Result<SessionCookie, AppError> {
        self.sessions.save_session(session).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save session");
            AppError::unexpected()
        })
    }
}
