use reqwest::Url;
use sea_orm::ConnectionTrait;

use crate::{
    model::settings::{FetchMode, SettingsDto, UpdateSettingsDto},
    server::{
        data::settings::SettingsRepository,
        error::{admin::AdminError, Error},
    },
};

pub struct SettingsService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingsService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the current settings straight from the store.
    ///
    /// Nothing is cached: every caller sees the latest admin edit.
    pub async fn get(&self) -> Result<SettingsDto, Error> {
        let settings = SettingsRepository::new(self.db)
            .get()
            .await?
            .ok_or_else(settings_missing)?;

        Ok(settings.into())
    }

    /// Validates and applies a partial settings update, returning the result.
    ///
    /// # Returns
    /// - `Ok(SettingsDto)` - Settings after the update
    /// - `Err(Error::AdminError)` - `source_url` is not an absolute http(s) URL or
    ///   `fetch_mode` is not a known mode
    /// - `Err(Error::InternalError)` - The settings row has not been seeded
    pub async fn update(&self, patch: UpdateSettingsDto) -> Result<SettingsDto, Error> {
        if let Some(source_url) = &patch.source_url {
            validate_source_url(source_url)?;
        }
        let fetch_mode = patch
            .fetch_mode
            .map(|mode| mode.parse::<FetchMode>().map_err(AdminError::InvalidFetchMode))
            .transpose()?;

        let settings = SettingsRepository::new(self.db)
            .update(patch.source_url, patch.signincode_password, fetch_mode)
            .await?
            .ok_or_else(settings_missing)?;

        tracing::info!(
            source_url = %settings.source_url,
            fetch_mode = %settings.fetch_mode,
            "Settings updated"
        );

        Ok(settings.into())
    }
}

impl From<entity::settings::Model> for SettingsDto {
    fn from(settings: entity::settings::Model) -> Self {
        let fetch_mode = settings.fetch_mode.parse().unwrap_or_else(|mode| {
            tracing::warn!(fetch_mode = %mode, "Unknown stored fetch mode, using default");
            FetchMode::default()
        });

        Self {
            source_url: settings.source_url,
            signincode_password: settings.signincode_password,
            fetch_mode,
        }
    }
}

fn settings_missing() -> Error {
    Error::InternalError("Settings have not been seeded".to_string())
}

fn validate_source_url(source_url: &str) -> Result<(), AdminError> {
    match Url::parse(source_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(AdminError::InvalidSourceUrl(source_url.to_string())),
    }
}
