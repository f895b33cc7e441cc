//! Trait definitions for the collaborators the domain talks to.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated via
//! `mockall` for unit tests.
//!
//! - [`AuthGateway`] - remote credential verification
//! - [`SessionStore`] - session persistence

pub mod auth_gateway;
pub mod session_store;

pub use auth_gateway::AuthGateway;
pub use session_store::SessionStore;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use session_store::MockSessionStore;
