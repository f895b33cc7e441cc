//! Session persistence.
//!
//! [`CookieSessionStore`] keeps the whole session in a signed cookie, so the
//! service holds no session state of its own.

mod cookie_session_store;

pub use cookie_session_store::{CookieSessionStore, SessionSettings};
