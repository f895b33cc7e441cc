//! Application layer services.
//!
//! Services orchestrate the collaborators defined in [`crate::domain::gateways`]
//! and expose a small API to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - credential login, session lookup and logout

pub mod services;
