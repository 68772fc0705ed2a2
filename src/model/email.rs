use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whitelist listing, in insertion order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailsDto {
    pub ok: bool,
    pub emails: Vec<String>,
}

impl EmailsDto {
    pub fn new(emails: Vec<String>) -> Self {
        Self { ok: true, emails }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddEmailDto {
    pub email: Option<String>,
}

/// Body of `POST /api/show-code`
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowCodeDto {
    pub email: Option<String>,
}
