//! HTTP controller endpoints for the codegate web API.
//!
//! Axum handlers for authentication, admin management, the shared whitelist listing and
//! the show-code proxy. Handlers gate the session, delegate to one service and shape the
//! response; every route is documented for the OpenAPI spec with utoipa.

pub mod admin;
pub mod auth;
pub mod email;
pub mod show_code;
pub mod util;
