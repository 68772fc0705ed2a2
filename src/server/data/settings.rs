use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

use crate::model::settings::FetchMode;

/// Primary key of the singleton settings row.
pub const SETTINGS_ID: i32 = 1;

pub struct SettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingsRepository<'a, C> {
    /// Creates a new instance of [`SettingsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the singleton settings row
    pub async fn create(
        &self,
        source_url: String,
        signincode_password: String,
        fetch_mode: FetchMode,
    ) -> Result<entity::settings::Model, DbErr> {
        let settings = entity::settings::ActiveModel {
            id: ActiveValue::Set(SETTINGS_ID),
            source_url: ActiveValue::Set(source_url),
            signincode_password: ActiveValue::Set(signincode_password),
            fetch_mode: ActiveValue::Set(fetch_mode.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        settings.insert(self.db).await
    }

    pub async fn get(&self) -> Result<Option<entity::settings::Model>, DbErr> {
        entity::prelude::Settings::find_by_id(SETTINGS_ID)
            .one(self.db)
            .await
    }

    /// Applies a partial update; fields passed as `None` keep their stored value
    ///
    /// Returns `Ok(None)` if the settings row has not been created yet.
    pub async fn update(
        &self,
        source_url: Option<String>,
        signincode_password: Option<String>,
        fetch_mode: Option<FetchMode>,
    ) -> Result<Option<entity::settings::Model>, DbErr> {
        let settings = match self.get().await? {
            Some(settings) => settings,
            None => return Ok(None),
        };

        let mut settings_am = settings.into_active_model();
        if let Some(source_url) = source_url {
            settings_am.source_url = ActiveValue::Set(source_url);
        }
        if let Some(signincode_password) = signincode_password {
            settings_am.signincode_password = ActiveValue::Set(signincode_password);
        }
        if let Some(fetch_mode) = fetch_mode {
            settings_am.fetch_mode = ActiveValue::Set(fetch_mode.to_string());
        }
        settings_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let settings = settings_am.update(self.db).await?;

        Ok(Some(settings))
    }
}
