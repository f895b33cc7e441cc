#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::http::header::SET_COOKIE;
use axum_test::{TestResponse, TestServer};
use crm_portal::api;
use crm_portal::application::services::LoginService;
use crm_portal::domain::auth_failure::{AuthFailure, ServerErrorBody};
use crm_portal::domain::entities::{AuthResponse, AuthToken, Credentials, User};
use crm_portal::domain::gateways::AuthGateway;
use crm_portal::infrastructure::session::{CookieSessionStore, SessionSettings};
use crm_portal::state::AppState;
use crm_portal::web;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SECRET: &str = "test-session-secret-test-session-secret";

/// Authentication service stand-in returning a fixed result.
pub struct FakeAuthGateway {
    result: Result<AuthResponse, AuthFailure>,
    reachable: bool,
    calls: AtomicUsize,
}

impl FakeAuthGateway {
    pub fn accepting(user: User, access_token: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(AuthResponse {
                user,
                token: AuthToken {
                    access_token: access_token.to_string(),
                },
            }),
            reachable: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(failure: AuthFailure) -> Arc<Self> {
        Arc::new(Self {
            result: Err(failure),
            reachable: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            result: Err(AuthFailure::Network {
                reason: "connection refused".to_string(),
            }),
            reachable: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, AuthFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    async fn health_check(&self) -> bool {
        self.reachable
    }
}

pub fn server_failure(status: u16, message: Option<&str>, error: Option<&str>) -> AuthFailure {
    AuthFailure::Server {
        status,
        body: ServerErrorBody {
            message: message.map(str::to_string),
            error: error.map(str::to_string),
        },
    }
}

pub fn sample_user() -> User {
    User::new(42, "سارا احمدی", "sara@example.com", "agent")
}

pub fn session_store() -> CookieSessionStore {
    CookieSessionStore::new(SessionSettings {
        cookie_name: "crm_session".to_string(),
        secret: TEST_SECRET.to_string(),
        ttl_seconds: 3600,
        secure: false,
    })
}

pub fn create_test_state(gateway: Arc<dyn AuthGateway>, demo_login_enabled: bool) -> AppState {
    let login_service = LoginService::new(gateway, Arc::new(session_store()), demo_login_enabled);
    AppState::new(Arc::new(login_service))
}

/// API and page routes without rate limiting or path normalization.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .route("/health", axum::routing::get(api::handlers::health_handler))
        .nest("/api", api::routes::auth_routes())
        .with_state(state)
}

pub fn make_server(gateway: Arc<dyn AuthGateway>, demo_login_enabled: bool) -> TestServer {
    TestServer::new(test_router(create_test_state(gateway, demo_login_enabled))).unwrap()
}

/// Returns the `Set-Cookie` header of a response, if any.
pub fn set_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Turns a `Set-Cookie` value into a `Cookie` request header value.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}
