//! Domain layer: entities, failure classification and collaborator contracts.
//!
//! - [`entities`] - users, credentials and session state
//! - [`auth_failure`] - tagged failures of the authentication service and the
//!   localized messages they map to
//! - [`gateways`] - traits implemented by `crate::infrastructure`
//!
//! Nothing in here depends on a concrete HTTP client or cookie format.

pub mod auth_failure;
pub mod entities;
pub mod gateways;
