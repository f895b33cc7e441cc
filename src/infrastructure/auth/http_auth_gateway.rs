//! JSON-over-HTTP implementation of [`AuthGateway`].

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::domain::auth_failure::{AuthFailure, ServerErrorBody};
use crate::domain::entities::{AuthResponse, Credentials};
use crate::domain::gateways::AuthGateway;

/// Client for the CRM authentication service.
///
/// Sends `POST {base}/auth/login` with `{"email", "password"}` and expects
/// `{"user": {..}, "token": {"accessToken": ".."}}` back.
///
/// The underlying [`reqwest::Client`] pools connections and is cheap to clone.
pub struct HttpAuthGateway {
    client: Client,
    base_url: Url,
    login_url: String,
}

impl HttpAuthGateway {
    /// Builds a gateway for the given base URL.
    ///
    /// # Arguments
    ///
    /// - `base_url` - e.g. `https://api.example.com/v1`; a trailing slash is optional
    /// - `timeout` - per-request timeout; an expired timeout is reported as
    ///   [`AuthFailure::Network`]
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid authentication service URL '{base_url}'"))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let login_url = format!("{}/auth/login", base_url.as_str().trim_end_matches('/'));
        info!("Authentication service at {}", login_url);

        Ok(Self {
            client,
            base_url,
            login_url,
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

/// Maps a transport error onto the failure taxonomy.
///
/// Builder errors mean nothing was sent; everything else happened after the
/// request left and no usable reply arrived.
fn classify_transport_error(e: &reqwest::Error) -> AuthFailure {
    if e.is_builder() {
        AuthFailure::Unknown {
            reason: e.to_string(),
        }
    } else {
        AuthFailure::Network {
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthFailure> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(|e| {
                warn!("Authentication request failed: {}", e);
                classify_transport_error(&e)
            })?;

        let status = response.status();
        debug!("Authentication service replied {}", status);

        if !status.is_success() {
            let body = match response.bytes().await {
                Ok(bytes) => ServerErrorBody::from_bytes(&bytes),
                Err(e) => {
                    warn!("Failed to read error body: {}", e);
                    ServerErrorBody::default()
                }
            };

            return Err(AuthFailure::Server {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<AuthResponse>().await.map_err(|e| {
            error!("Unexpected authentication response: {}", e);
            AuthFailure::Unknown {
                reason: e.to_string(),
            }
        })
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.base_url.clone()).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Authentication service health check failed: {}", e);
                false
            }
        }
    }
}
