//! # CRM Portal
//!
//! Login endpoint and server-rendered shell of the CRM Atrsun web application,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Users, sessions, failure classification, collaborator traits
//! - **Application Layer** ([`application`]) - Login orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP auth client, signed cookie sessions
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Root layout and pages (Askama templates)
//!
//! ## Login Flow
//!
//! 1. `POST /api/auth/login` receives `{ "email", "password" }`
//! 2. The authentication service verifies the credentials
//! 3. The session is sealed into a signed cookie
//! 4. The response carries `{ "success": true, "user": .. }` and `Set-Cookie`
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_API_URL="https://api.example.com/v1"
//! export SESSION_SECRET="$(cargo run --bin admin -- secret generate --raw)"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginOutcome, LoginService};
    pub use crate::domain::auth_failure::{AuthFailure, ServerErrorBody};
    pub use crate::domain::entities::{
        AuthResponse, AuthToken, Credentials, SessionCookie, SessionData, User,
    };
    pub use crate::domain::gateways::{AuthGateway, SessionStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
