//! Root layout data shared by every page.

use crate::domain::entities::{SessionData, User};

/// Document-level metadata for `templates/layout.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub viewport: &'static str,
    pub lang: &'static str,
    pub dir: &'static str,
}

impl PageMetadata {
    pub const fn root() -> Self {
        Self {
            title: "CRM Atrsun",
            description: "سیستم مدیریت مشتریان",
            viewport: "width=device-width, initial-scale=1",
            lang: "fa",
            dir: "rtl",
        }
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::root()
    }
}

/// Authentication state rendered into `#auth-provider`.
///
/// `user_json` is the serialized [`User`] (or `null`); templates escape it
/// into a `data-user` attribute. The access token never reaches the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub is_logged_in: bool,
    pub user_name: String,
    pub user_json: String,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self {
            is_logged_in: false,
            user_name: String::new(),
            user_json: "null".to_string(),
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self {
            is_logged_in: true,
            user_name: if user.name.is_empty() {
                user.email.clone()
            } else {
                user.name.clone()
            },
            user_json: serde_json::to_string(user).unwrap_or_else(|_| "null".to_string()),
        }
    }

    pub fn from_session(session: Option<&SessionData>) -> Self {
        match session {
            Some(session) if session.is_logged_in => Self::for_user(&session.user),
            _ => Self::anonymous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_metadata() {
        let meta = PageMetadata::root();
        assert_eq!(meta.title, "CRM Atrsun");
        assert_eq!(meta.lang, "fa");
        assert_eq!(meta.dir, "rtl");
    }

    #[test]
    fn test_context_from_session() {
        let session = SessionData::logged_in(User::new(4, "Leila", "l@example.com", "agent"), "secret-token");
        let ctx = AuthContext::from_session(Some(&session));

        assert!(ctx.is_logged_in);
        assert_eq!(ctx.user_name, "Leila");
        assert!(ctx.user_json.contains("\"id\":4"));
        assert!(!ctx.user_json.contains("secret-token"));
    }

    #[test]
    fn test_nameless_user_is_greeted_by_email() {
        let mut user = User::new(8, "", "omid@example.com", "agent");
        user.id = crate::domain::entities::UserId::from("u-8");

        let ctx = AuthContext::for_user(&user);

        assert_eq!(ctx.user_name, "omid@example.com");
        assert!(ctx.user_json.contains("\"id\":\"u-8\""));
    }

    #[test]
    fn test_context_without_session() {
        assert_eq!(AuthContext::from_session(None), AuthContext::anonymous());
    }
}
