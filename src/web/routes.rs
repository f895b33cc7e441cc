//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, login_page_handler};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /`      - Home page
/// - `GET /login` - Login page
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/login", get(login_page_handler))
}
