//! Server application core modules.
//!
//! This module contains all server-side functionality for codegate: HTTP routing, the session
//! gate, the record store repositories, the outbound signin-code client and the HTML
//! sanitizer that makes the fetched page safe to render.

pub mod client;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod sanitize;
pub mod service;
pub mod session_store;
pub mod startup;
pub mod util;
