use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://codegate.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 4000);
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_SOURCE_URL: &str = "https://signincode.vivarocky.in/";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Upper bound for `FETCH_TIMEOUT_SECS`; the outbound fetch must never hold a request forever.
const MAX_FETCH_TIMEOUT_SECS: u64 = 120;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub admin_username: String,
    /// Only required on first start, when no admin record exists yet
    pub admin_password: Option<String>,
    pub signincode_source_url: String,
    pub signincode_password: String,
    pub fetch_timeout: Duration,
    pub secure_cookies: bool,
    pub strip_event_handlers: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let fetch_timeout_secs: u64 =
            parse_var(&get, "FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;
        if !(1..=MAX_FETCH_TIMEOUT_SECS).contains(&fetch_timeout_secs) {
            return Err(ConfigError::InvalidEnvValue {
                var: "FETCH_TIMEOUT_SECS".to_string(),
                reason: format!("must be between 1 and {}", MAX_FETCH_TIMEOUT_SECS),
            });
        }

        // Secure cookies by default outside of debug builds
        let secure_cookies = parse_var(&get, "SESSION_SECURE_COOKIE", !cfg!(debug_assertions))?;

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: parse_var(&get, "BIND_ADDRESS", SocketAddr::from(DEFAULT_BIND_ADDRESS))?,
            admin_username: get("ADMIN_USERNAME")
                .map(|username| username.trim().to_string())
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: get("ADMIN_PASSWORD"),
            signincode_source_url: get("SIGNINCODE_SOURCE_URL")
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            signincode_password: lookup("SIGNINCODE_PASSWORD").unwrap_or_default(),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            secure_cookies,
            strip_event_handlers: parse_var(&get, "STRIP_EVENT_HANDLERS", true)?,
        })
    }
}

fn parse_var<T, F>(get: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: key.to_string(),
                reason: e.to_string(),
            }),
    }
}
