use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AccountFixtures<'a> {
    pub async fn insert_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::admin::Model, TestError> {
        Ok(
            entity::prelude::Admin::insert(entity::admin::ActiveModel {
                id: ActiveValue::Set(1),
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(hash(password)?),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user(
        &self,
        username: &str,
        password: &str,
        active: bool,
    ) -> Result<entity::signin_user::Model, TestError> {
        Ok(
            entity::prelude::SigninUser::insert(entity::signin_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(hash(password)?),
                active: ActiveValue::Set(active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

/// Hashes a fixture password the same way the server stores credentials.
pub fn hash(password: &str) -> Result<String, TestError> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
