use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of the show-code pipeline, one per stage.
#[derive(Error, Debug)]
pub enum ShowCodeError {
    #[error("Show-code request is missing an email")]
    MissingEmail,
    #[error("Email {0:?} is not on the whitelist")]
    EmailNotActivated(String),
    #[error("Signin-code source rejected the configured signincode password")]
    WrongSigninCodePassword,
    #[error("Failed to fetch signin-code page: {0}")]
    FetchFailed(#[source] reqwest::Error),
}

impl IntoResponse for ShowCodeError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingEmail => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Missing email")
            }
            Self::EmailNotActivated(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::FORBIDDEN, "Email not activated")
            }
            Self::WrongSigninCodePassword => {
                tracing::warn!("{}", self);

                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Wrong signincode password (Admin > Settings)",
                )
            }
            Self::FetchFailed(ref err) => {
                tracing::error!(error = ?err, "{}", self);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch the signin code page",
                )
            }
        }
    }
}
