//! Contract for session persistence.

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::domain::entities::{SessionCookie, SessionData};
use crate::error::AppError;

/// Persists session state and hands back the cookie that carries it.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::CookieSessionStore`] - signed, stateless cookie
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists a session and returns the `Set-Cookie` value for the response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session cannot be encoded.
    async fn save_session(&self, session: &SessionData) -> Result<SessionCookie, AppError>;

    /// Reads the session referenced by the request's `Cookie` header.
    ///
    /// Missing, tampered or expired sessions are `Ok(None)`.
    async fn load_session(&self, headers: &HeaderMap) -> Result<Option<SessionData>, AppError>;

    /// Returns a `Set-Cookie` value that removes the session from the browser.
    async fn destroy_session(&self) -> Result<SessionCookie, AppError>;
}
