//! Service layer for business logic.
//!
//! Services validate and normalise input, coordinate repositories and the outbound client,
//! and translate outcomes into domain errors. Controllers stay thin: they gate the session,
//! call one service method and shape the response.

pub mod auth;
pub mod email;
pub mod settings;
pub mod show_code;
pub mod user;
