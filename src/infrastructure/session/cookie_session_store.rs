//! Signed cookie implementation of [`SessionStore`].

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::domain::entities::{SessionCookie, SessionData};
use crate::domain::gateways::SessionStore;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Cookie and signing parameters.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    /// HMAC key; every instance serving the same domain must share it.
    pub secret: String,
    pub ttl_seconds: u64,
    /// Adds the `Secure` attribute. Enable whenever the site is served over HTTPS.
    pub secure: bool,
}

#[derive(Serialize)]
struct SealedSession<'a> {
    session: &'a SessionData,
    expires_at: i64,
}

#[derive(Deserialize)]
struct OpenedSession {
    session: SessionData,
    expires_at: i64,
}

/// Stores the session inside the cookie itself.
///
/// # Cookie Format
///
/// ```text
/// <name>=<base64url(json payload)>.<base64url(hmac-sha256(payload))>
/// ```
///
/// The payload carries the session and its absolute expiry. A cookie whose
/// signature does not verify, that does not decode, or that has expired is
/// treated as absent.
pub struct CookieSessionStore {
    settings: SessionSettings,
}

impl CookieSessionStore {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }

    pub fn cookie_name(&self) -> &str {
        &self.settings.cookie_name
    }

    fn mac(&self) -> Result<HmacSha256, AppError> {
        HmacSha256::new_from_slice(self.settings.secret.as_bytes())
            .map_err(|e| AppError::internal(format!("Invalid session secret: {e}")))
    }

    fn sign(&self, payload: &str) -> Result<String, AppError> {
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    /// Encodes a session that expires `ttl_seconds` after `now` (unix seconds).
    pub fn seal_at(&self, session: &SessionData, now: i64) -> Result<String, AppError> {
        let ttl = i64::try_from(self.settings.ttl_seconds).unwrap_or(i64::MAX);
        let sealed = SealedSession {
            session,
            expires_at: now.saturating_add(ttl),
        };

        let json = serde_json::to_vec(&sealed)
            .map_err(|e| AppError::internal(format!("Failed to encode session: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload)?;

        Ok(format!("{payload}.{signature}"))
    }

    /// Decodes a cookie value as of `now` (unix seconds).
    ///
    /// Returns `None` for anything that is not a valid, unexpired session.
    pub fn open_at(&self, value: &str, now: i64) -> Option<SessionData> {
        let (payload, signature) = value.split_once('.')?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let opened: OpenedSession = serde_json::from_slice(&json).ok()?;

        if opened.expires_at <= now {
            tracing::debug!("Session cookie expired");
            return None;
        }

        Some(opened.session)
    }

    fn build_cookie(&self, value: String, max_age: time::Duration) -> SessionCookie {
        let cookie = Cookie::build((self.settings.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.secure)
            .max_age(max_age)
            .build();

        SessionCookie(cookie.to_string())
    }
}

#[async_trait]
impl SessionStore for CookieSessionStore {
    async fn save_session(&self, session: &SessionData) -> Result<SessionCookie, AppError> {
        let value = self.seal_at(session, Utc::now().timestamp())?;
        let ttl = i64::try_from(self.settings.ttl_seconds).unwrap_or(i64::MAX);

        Ok(self.build_cookie(value, time::Duration::seconds(ttl)))
    }

    async fn load_session(&self, headers: &HeaderMap) -> Result<Option<SessionData>, AppError> {
        let jar = CookieJar::from_headers(headers);

        let Some(cookie) = jar.get(&self.settings.cookie_name) else {
            return Ok(None);
        };

        let session = self.open_at(cookie.value(), Utc::now().timestamp());
        if session.is_none() {
            tracing::debug!("Ignoring invalid session cookie");
        }

        Ok(session)
    }

    async fn destroy_session(&self) -> Result<SessionCookie, AppError> {
        Ok(self.build_cookie(String::new(), time::Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use axum::http::header::COOKIE;

    fn store() -> CookieSessionStore {
        CookieSessionStore::new(SessionSettings {
            cookie_name: "crm_session".to_string(),
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ttl_seconds: 3600,
            secure: false,
        })
    }

    fn session() -> SessionData {
        SessionData::logged_in(User::new(5, "Nima", "nima@example.com", "agent"), "tok-5")
    }

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie.parse().unwrap());
        headers
    }

    #[test]
    fn test_seal_and_open() {
        let store = store();
        let value = store.seal_at(&session(), 1_000).unwrap();

        assert_eq!(store.open_at(&value, 1_001), Some(session()));
    }

    #[test]
    fn test_expired_cookie_is_rejected() {
        let store = store();
        let value = store.seal_at(&session(), 1_000).unwrap();

        assert!(store.open_at(&value, 1_000 + 3600).is_none());
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let store = store();
        let value = store.seal_at(&session(), 1_000).unwrap();
        let (_, signature) = value.split_once('.').unwrap();

        let mut forged = session();
        forged.user.role = "admin".to_string();
        let forged_payload = store.seal_at(&forged, 1_000).unwrap();
        let (forged_payload, _) = forged_payload.split_once('.').unwrap();

        assert!(store.open_at(&format!("{forged_payload}.{signature}"), 1_001).is_none());
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let value = store().seal_at(&session(), 1_000).unwrap();
        let other = CookieSessionStore::new(SessionSettings {
            secret: "another-secret-another-secret-xx".to_string(),
            ..store().settings
        });

        assert!(other.open_at(&value, 1_001).is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let store = store();
        assert!(store.open_at("", 0).is_none());
        assert!(store.open_at("no-dot", 0).is_none());
        assert!(store.open_at("a.b", 0).is_none());
    }

    #[tokio::test]
    async fn test_set_cookie_attributes() {
        let cookie = store().save_session(&session()).await.unwrap();
        let value = cookie.as_str();

        assert!(value.starts_with("crm_session="));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=3600"));
        assert!(!value.contains("Secure"));
    }

    #[tokio::test]
    async fn test_load_from_request_headers() {
        let store = store();
        let cookie = store.save_session(&session()).await.unwrap();
        let pair = cookie.as_str().split(';').next().unwrap();

        let headers = headers_with(&format!("theme=dark; {pair}"));
        let loaded = store.load_session(&headers).await.unwrap();

        assert_eq!(loaded, Some(session()));
    }

    #[tokio::test]
    async fn test_load_without_cookie() {
        let loaded = store().load_session(&HeaderMap::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_destroy_expires_cookie() {
        let cookie = store().destroy_session().await.unwrap();
        assert!(cookie.as_str().starts_with("crm_session=;"));
        assert!(cookie.as_str().contains("Max-Age=0"));
    }
}
