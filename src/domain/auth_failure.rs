//! Classified failures of the authentication service.

use serde::Deserialize;

/// Fallback shown to the user when nothing more specific is known.
pub const MSG_INVALID_CREDENTIALS: &str = "نام کاربری یا رمز عبور اشتباه است";

/// Shown when the authentication service answers 404.
pub const MSG_INVALID_API_ADDRESS: &str = "آدرس API نامعتبر است. لطفا با پشتیبانی تماس بگیرید.";

/// Shown when the request went out but no reply came back.
pub const MSG_SERVER_NOT_RESPONDING: &str =
    "سرور پاسخگو نیست. لطفا اتصال اینترنت خود را بررسی کنید.";

/// Error body fields the authentication service may send on rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerErrorBody {
    /// Decodes a raw body, treating anything that is not the expected JSON as empty.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

/// Why a login attempt against the authentication service did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// The service replied with a non-success status.
    #[error("authentication service replied {status}")]
    Server { status: u16, body: ServerErrorBody },

    /// The request was sent but no response arrived.
    #[error("authentication service unreachable: {reason}")]
    Network { reason: String },

    #[error("authentication failed: {reason}")]
    Unknown { reason: String },
}

impl AuthFailure {
    /// Selects the message shown to the user.
    ///
    /// A body `message` wins over a body `error`, which wins over the
    /// 404 mapping. Empty strings count as absent.
    pub fn user_message(&self) -> String {
        match self {
            AuthFailure::Server { status, body } => {
                if let Some(message) = non_empty(&body.message) {
                    message.to_string()
                } else if let Some(error) = non_empty(&body.error) {
                    error.to_string()
                } else if *status == 404 {
                    MSG_INVALID_API_ADDRESS.to_string()
                } else {
                    MSG_INVALID_CREDENTIALS.to_string()
                }
            }
            AuthFailure::Network { .. } => MSG_SERVER_NOT_RESPONDING.to_string(),
            AuthFailure::Unknown { .. } => MSG_INVALID_CREDENTIALS.to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
