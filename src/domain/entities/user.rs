//! User entity as issued by the authentication service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// User identifier as issued by the authentication service.
///
/// Numeric ids and opaque string ids (UUIDs, document ids) are both accepted
/// and written back in the shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

/// An authenticated CRM user.
///
/// Only `id` is required. The descriptive fields default to empty when the
/// authentication service leaves them out, and are then omitted again on the
/// way back. Anything else attached to the user is kept in `extra` and
/// serialized back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Creates a user with no extra attributes.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::Number(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }
}

/// Access token block of an [`AuthResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub access_token: String,
}

/// Successful reply of the authentication service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: AuthToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_response_from_wire() {
        let raw = json!({
            "user": {"id": 7, "name": "Sara", "email": "sara@example.com", "role": "agent"},
            "token": {"accessToken": "abc"}
        });

        let response: AuthResponse = serde_json::from_value(raw).unwrap();

        assert_eq!(response.user.id, UserId::Number(7));
        assert_eq!(response.user.role, "agent");
        assert_eq!(response.token.access_token, "abc");
    }

    #[test]
    fn test_unknown_user_fields_survive() {
        let raw = json!({
            "id": 3,
            "name": "Reza",
            "email": "reza@example.com",
            "role": "manager",
            "department": "sales"
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.extra.get("department"), Some(&json!("sales")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_missing_role_defaults_to_empty() {
        let user: User =
            serde_json::from_value(json!({"id": 1, "name": "A", "email": "a@b.c"})).unwrap();
        assert!(user.role.is_empty());
    }

    #[test]
    fn test_string_id_without_name() {
        let raw = json!({"id": "u-77", "email": "u77@example.com"});

        let user: User = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(user.id, UserId::from("u-77"));
        assert_eq!(user.id.to_string(), "u-77");
        assert!(user.name.is_empty());
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_value::<User>(json!({"name": "A"})).is_err());
    }
}
