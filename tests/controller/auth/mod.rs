//! Tests for login, logout and the session identity endpoint.

mod login;
mod logout;
