use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account as exposed to admins; the password hash never leaves the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub ok: bool,
    pub users: Vec<UserDto>,
}

/// Create-or-replace request for a user account
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Defaults to `false` when omitted
    pub active: Option<bool>,
}

/// Partial user update; a password is only replaced when a non-empty one is sent
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub password: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAdminPasswordDto {
    pub password: Option<String>,
}
