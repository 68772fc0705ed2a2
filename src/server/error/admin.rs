use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Request is missing required fields")]
    MissingFields,
    #[error("Request is missing an email")]
    MissingEmail,
    #[error("Invalid source_url {0:?}")]
    InvalidSourceUrl(String),
    #[error("Invalid fetch_mode {0:?}")]
    InvalidFetchMode(String),
    #[error("User {0:?} not found")]
    UserNotFound(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingFields => error_response(StatusCode::BAD_REQUEST, "Missing fields"),
            Self::MissingEmail => error_response(StatusCode::BAD_REQUEST, "Missing email"),
            Self::InvalidSourceUrl(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid source_url")
            }
            Self::InvalidFetchMode(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid fetch_mode")
            }
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
        }
    }
}
