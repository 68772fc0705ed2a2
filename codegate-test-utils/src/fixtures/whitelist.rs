use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn whitelist<'a>(&'a self) -> WhitelistFixtures<'a> {
        WhitelistFixtures { setup: self }
    }
}

pub struct WhitelistFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> WhitelistFixtures<'a> {
    /// Inserts `email` as given; callers pass an already normalized address.
    pub async fn insert_email(
        &self,
        email: &str,
    ) -> Result<entity::whitelisted_email::Model, TestError> {
        Ok(
            entity::prelude::WhitelistedEmail::insert(entity::whitelisted_email::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
