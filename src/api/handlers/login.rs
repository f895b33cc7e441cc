//! Handler for the credential login endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, MISSING_CREDENTIALS};
use crate::api::handlers::session_cookie_header;
use crate::error::AppError;
use crate::state::AppState;

/// Logs a user in and opens a session.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Request Body
///
/// ```json
/// { "email": "sara@example.com", "password": "..." }
/// ```
///
/// The body is read as raw bytes so that undecodable input is reported as an
/// internal error rather than axum's extractor rejection. Any other JSON
/// document, objects or not, goes through the presence check.
///
/// # Response
///
/// ```json
/// { "success": true, "user": { "id": 9, "name": "...", "email": "...", "role": "agent" } }
/// ```
///
/// with a `Set-Cookie` header carrying the session.
///
/// # Errors
///
/// - **400** `{"error": "Email and password are required"}` - a field is missing or empty
/// - **401** `{"error": "<localized message>"}` - the authentication service rejected the login
/// - **500** `{"error": "An unexpected error occurred"}` - invalid JSON, a top-level `null`,
///   or a session that could not be stored (this never falls back to the demo login)
pub async fn login_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match login(&state, &body).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn login(state: &AppState, body: &[u8]) -> Result<Response, AppError> {
    let document: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse login request");
        AppError::unexpected()
    })?;
    if document.is_null() {
        tracing::error!("Login request body is null");
        return Err(AppError::unexpected());
    }

    let payload = LoginRequest::from_json(&document);

    if payload.validate().is_err() {
        tracing::info!("Login attempt failed: missing email or password");
        return Err(AppError::bad_request(MISSING_CREDENTIALS));
    }

    let credentials = payload
        .into_credentials()
        .ok_or_else(|| AppError::bad_request(MISSING_CREDENTIALS))?;

    let outcome = state.login_service.login(&credentials).await?;
    let cookie = session_cookie_header(&outcome.cookie)?;

    tracing::info!(email = %outcome.user.email, "Login completed");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            user: outcome.user,
        }),
    )
        .into_response())
}
