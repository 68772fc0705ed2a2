use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false` for error responses
    pub ok: bool,
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Plain acknowledgement for requests without a response payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OkDto {
    pub ok: bool,
}

impl Default for OkDto {
    fn default() -> Self {
        Self { ok: true }
    }
}
