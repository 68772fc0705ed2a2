use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::auth::Role, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login request is missing role, username or password")]
    MissingFields,
    #[error("Login requested for unknown role {0:?}")]
    InvalidRole(String),
    #[error("Admin login attempted with unknown username {0:?}")]
    InvalidAdmin(String),
    #[error("User {0:?} not found")]
    UserNotFound(String),
    #[error("Wrong password for {0} {1:?}")]
    WrongPassword(Role, String),
    #[error("User {0:?} is not active")]
    UserNotActive(String),
    #[error("Request has no active session with the required role")]
    Unauthorized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingFields => error_response(StatusCode::BAD_REQUEST, "Missing fields"),
            Self::InvalidRole(_) => error_response(StatusCode::BAD_REQUEST, "Invalid role"),
            Self::InvalidAdmin(_) => error_response(StatusCode::UNAUTHORIZED, "Invalid admin"),
            Self::UserNotFound(_) => error_response(StatusCode::UNAUTHORIZED, "User not found"),
            Self::WrongPassword(_, _) => error_response(StatusCode::UNAUTHORIZED, "Wrong password"),
            Self::UserNotActive(_) => error_response(StatusCode::FORBIDDEN, "User not active"),
            Self::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized"),
        }
    }
}
