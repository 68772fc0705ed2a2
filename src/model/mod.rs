//! Request and response models shared by the HTTP API.

pub mod api;
pub mod auth;
pub mod email;
pub mod settings;
pub mod user;
