use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role held by an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(other.to_string()),
        }
    }
}

/// Login request body.
///
/// Every field is optional at the wire level so that missing values produce the
/// API's own `400 Missing fields` error instead of a deserialization rejection.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub role: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// The authenticated identity stored in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub role: Role,
    pub username: String,
}

/// Response of `GET /api/auth/me`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeDto {
    pub ok: bool,
    /// `null` when the caller has no active session
    pub user: Option<SessionUserDto>,
}
