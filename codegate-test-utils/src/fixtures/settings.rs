use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn settings<'a>(&'a self) -> SettingsFixtures<'a> {
        SettingsFixtures { setup: self }
    }
}

pub struct SettingsFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SettingsFixtures<'a> {
    /// Inserts the settings row with `source_url` pointing at the mock server.
    pub async fn insert_settings(
        &self,
        signincode_password: &str,
    ) -> Result<entity::settings::Model, TestError> {
        let source_url = self.setup.source_url();

        self.insert_settings_with_url(&source_url, signincode_password)
            .await
    }

    pub async fn insert_settings_with_url(
        &self,
        source_url: &str,
        signincode_password: &str,
    ) -> Result<entity::settings::Model, TestError> {
        Ok(
            entity::prelude::Settings::insert(entity::settings::ActiveModel {
                id: ActiveValue::Set(1),
                source_url: ActiveValue::Set(source_url.to_string()),
                signincode_password: ActiveValue::Set(signincode_password.to_string()),
                fetch_mode: ActiveValue::Set("curl".to_string()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
