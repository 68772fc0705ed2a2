use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How the admin wants the signin-code page fetched.
///
/// The value is persisted and reported back to the admin UI; both modes currently
/// issue the same outbound request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Curl,
    Fetch,
}

impl FetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::Fetch => "fetch",
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curl" => Ok(Self::Curl),
            "fetch" => Ok(Self::Fetch),
            other => Err(other.to_string()),
        }
    }
}

/// Proxy configuration read on every show-code request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SettingsDto {
    /// Page the signin code is requested from
    pub source_url: String,
    /// Shared password forwarded to the third party
    pub signincode_password: String,
    pub fetch_mode: FetchMode,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponseDto {
    pub ok: bool,
    pub settings: SettingsDto,
}

/// Partial settings update; absent fields keep their current value
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsDto {
    pub source_url: Option<String>,
    pub signincode_password: Option<String>,
    pub fetch_mode: Option<String>,
}
