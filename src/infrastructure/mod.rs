//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits in [`crate::domain::gateways`].
//!
//! # Modules
//!
//! - [`auth`] - HTTP client for the remote authentication service
//! - [`session`] - signed cookie session store

pub mod auth;
pub mod session;
