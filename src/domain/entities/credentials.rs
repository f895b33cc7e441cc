//! Login credentials.

use std::fmt;

/// Email/password pair submitted by the browser.
///
/// Lives for a single request. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact comparison against a known pair.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("a@example.com", "hunter2");
        let printed = format!("{creds:?}");
        assert!(printed.contains("a@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_matches_is_exact() {
        let creds = Credentials::new("admin@example.com", "admin123");
        assert!(creds.matches("admin@example.com", "admin123"));
        assert!(!creds.matches("Admin@example.com", "admin123"));
        assert!(!creds.matches("admin@example.com", "admin1234"));
    }
}
