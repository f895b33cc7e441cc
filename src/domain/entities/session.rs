//! Session state carried in the session cookie.

use serde::{Deserialize, Serialize};

use super::User;

/// State persisted for a logged-in browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user: User,
    pub token: String,
    pub is_logged_in: bool,
}

impl SessionData {
    /// Session for a freshly authenticated user.
    pub fn logged_in(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
            is_logged_in: true,
        }
    }
}

/// A complete `Set-Cookie` header value produced by a session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie(pub String);

impl SessionCookie {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_wire_names() {
        let session = SessionData::logged_in(User::new(1, "A", "a@b.c", "admin"), "tok");
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["isLoggedIn"], true);
        assert_eq!(json["token"], "tok");
        assert_eq!(json["user"]["id"], 1);
    }
}
