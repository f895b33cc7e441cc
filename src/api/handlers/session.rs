//! Handlers for reading and ending the browser session.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::IntoResponse,
};

use crate::api::dto::auth::{LogoutResponse, SessionResponse};
use crate::api::handlers::session_cookie_header;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the request carries a valid session.
///
/// # Endpoint
///
/// `GET /api/auth/session`
///
/// # Response
///
/// ```json
/// { "isLoggedIn": true, "user": { "id": 9, "name": "...", "email": "...", "role": "agent" } }
/// ```
///
/// or `{ "isLoggedIn": false }`.
pub async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.login_service.current_session(&headers).await?;

    Ok(Json(match session {
        Some(session) => SessionResponse {
            is_logged_in: true,
            user: Some(session.user),
        },
        None => SessionResponse {
            is_logged_in: false,
            user: None,
        },
    }))
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
pub async fn logout_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cookie = state.login_service.logout().await?;
    tracing::info!("Session cleared");

    Ok((
        [(SET_COOKIE, session_cookie_header(&cookie)?)],
        Json(LogoutResponse { success: true }),
    ))
}
