//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod login;
pub mod session;

pub use health::health_handler;
pub use login::login_handler;
pub use session::{logout_handler, session_handler};

use axum::http::HeaderValue;

use crate::domain::entities::SessionCookie;
use crate::error::AppError;

/// Converts a session cookie into a `Set-Cookie` header value.
fn session_cookie_header(cookie: &SessionCookie) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(cookie.as_str()).map_err(|e| {
        tracing::error!(error = %e, "Session cookie is not a valid header value");
        AppError::unexpected()
    })
}
