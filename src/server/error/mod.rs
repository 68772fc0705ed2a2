//! Error types for the codegate server.
//!
//! Each domain (authentication, admin management, the show-code pipeline, configuration)
//! owns a `thiserror` enum with its own HTTP mapping. They are aggregated into [`Error`],
//! which implements `IntoResponse` so handlers can bubble failures up with `?`. Every error
//! body has the shape `{"ok": false, "error": "<message>"}`.

pub mod admin;
pub mod auth;
pub mod config;
pub mod show_code;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        admin::AdminError, auth::AuthError, config::ConfigError, show_code::ShowCodeError,
    },
};

/// Main error type for the codegate server.
///
/// Domain errors carry their own status codes; library errors (database, session store,
/// password hashing, blocking tasks, HTTP client construction, I/O) are treated as internal
/// failures and answered with a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Login or session gate failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Invalid input to an admin management endpoint.
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Failure inside the show-code pipeline.
    #[error(transparent)]
    ShowCodeError(#[from] ShowCodeError),
    /// Parse error (failed to convert a stored or session value).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a record the server relies on is missing or inconsistent.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or hash parsing error.
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// A task offloaded to the blocking pool panicked or was cancelled.
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// Outbound HTTP client could not be constructed.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Socket or listener error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps domain errors to their own responses and everything else to a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            Self::ShowCodeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only receives a generic message so that internal
/// details (database errors, upstream transport errors) are never exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Builds a JSON error response with the API's `{ok: false, error}` envelope.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorDto::new(message))).into_response()
}
