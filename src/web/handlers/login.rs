//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::layout::{AuthContext, PageMetadata};

/// Template for the login page.
///
/// Renders `templates/login.html` with an email/password form. The inline
/// script posts the form as JSON to `/api/auth/login` and shows the `error`
/// field of a failed response.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub meta: PageMetadata,
    pub auth: AuthContext,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// Visitors with a valid session are redirected to `/`.
pub async fn login_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if state.login_service.current_session(&headers).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(LoginTemplate {
        meta: state.page.clone(),
        auth: AuthContext::anonymous(),
    }
    .into_response())
}
