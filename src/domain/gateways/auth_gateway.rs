//! Contract for the remote authentication service.

use async_trait::async_trait;

use crate::domain::auth_failure::AuthFailure;
use crate::domain::entities::{AuthResponse, Credentials};

/// Verifies credentials and issues access tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HttpAuthGateway`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Submits credentials to the authentication service.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] describing how the attempt failed. The
    /// variant drives the message shown to the user.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthFailure>;

    /// Returns `true` if the service answers at all.
    async fn health_check(&self) -> bool;
}
