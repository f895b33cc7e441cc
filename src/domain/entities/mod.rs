//! Core domain entities.
//!
//! - [`User`] / [`AuthResponse`] - what the authentication service returns
//! - [`Credentials`] - per-request login input
//! - [`SessionData`] / [`SessionCookie`] - what the portal persists in the browser

pub mod credentials;
pub mod session;
pub mod user;

pub use credentials::Credentials;
pub use session::{SessionCookie, SessionData};
pub use user::{AuthResponse, AuthToken, User, UserId};
