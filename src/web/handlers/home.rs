//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::layout::{AuthContext, PageMetadata};

/// Template for the home page.
///
/// Extends `templates/layout.html`; greets the user when a session exists and
/// links to the login page otherwise.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMetadata,
    pub auth: AuthContext,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = state.login_service.current_session(&headers).await?;

    Ok(HomeTemplate {
        meta: state.page.clone(),
        auth: AuthContext::from_session(session.as_ref()),
    })
}
