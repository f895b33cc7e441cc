//! DTOs for the `/api/auth/*` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::{Credentials, User};

/// Returned with 400 when either credential is absent.
pub const MISSING_CREDENTIALS: &str = "Email and password are required";

/// Login form submitted by the browser.
///
/// Both fields are optional at the serde level so that a missing field is a
/// validation error (400) rather than a decode error. Empty strings count as
/// missing.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Reads the credential fields out of any JSON document.
    ///
    /// Non-object documents carry no fields. `null`, `false`, `0` and `""`
    /// count as absent. Other non-string values are kept as their JSON text.
    pub fn from_json(body: &Value) -> Self {
        Self {
            email: field(body, "email"),
            password: field(body, "password"),
        }
    }

    /// Consumes a validated request. Returns `None` if a field is absent.
    pub fn into_credentials(self) -> Option<Credentials> {
        Some(Credentials::new(self.email?, self.password?))
    }
}

fn field(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Body of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

/// Current session as seen by the browser. The access token is never exposed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Body of a successful logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
