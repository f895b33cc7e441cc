//! Server-rendered pages.
//!
//! Every page extends `templates/layout.html`, which declares the document
//! metadata and wraps the page body in the authentication context element
//! the browser scripts read the current user from.
//!
//! # Modules
//!
//! - [`layout`] - page metadata and the authentication context
//! - [`handlers`] - page handlers
//! - [`routes`] - page route configuration

pub mod handlers;
pub mod layout;
pub mod routes;
