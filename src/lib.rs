//! Session-gated signin-code proxy.
//!
//! Authenticated users ask the server to fetch a third-party signin-code page on their behalf;
//! the page is sanitized before it is returned to the browser. Admins manage the credentials,
//! the email whitelist and the proxy settings.

pub mod model;
pub mod server;
