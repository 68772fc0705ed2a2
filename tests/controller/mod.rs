//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a test session and state; responses are checked for
//! status code and body.

mod auth;
mod email;
mod show_code;
