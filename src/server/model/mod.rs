//! Server application models.
//!
//! Application state shared by every handler and the records kept in a browser session.

pub mod app;
pub mod session;
