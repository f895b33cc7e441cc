//! API route configuration.

use crate::api::handlers::{login_handler, logout_handler, session_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Authentication routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /auth/login`   - Credential login, sets the session cookie
/// - `GET  /auth/session` - Current session user
/// - `POST /auth/logout`  - Clears the session cookie
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/session", get(session_handler))
        .route("/auth/logout", post(logout_handler))
}
