//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::web::layout::PageMetadata;

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
    pub page: PageMetadata,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self {
            login_service,
            page: PageMetadata::root(),
        }
    }
}
