use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

/// Primary key of the singleton admin row.
pub const ADMIN_ID: i32 = 1;

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    /// Creates a new instance of [`AdminRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the singleton admin record
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<entity::admin::Model, DbErr> {
        let admin = entity::admin::ActiveModel {
            id: ActiveValue::Set(ADMIN_ID),
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        admin.insert(self.db).await
    }

    pub async fn get(&self) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(ADMIN_ID).one(self.db).await
    }

    /// Replaces the admin password hash
    ///
    /// Returns `Ok(None)` if the admin record has not been created yet.
    pub async fn set_password_hash(
        &self,
        password_hash: String,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        let admin = match self.get().await? {
            Some(admin) => admin,
            None => return Ok(None),
        };

        let mut admin_am = admin.into_active_model();
        admin_am.password_hash = ActiveValue::Set(password_hash);
        admin_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let admin = admin_am.update(self.db).await?;

        Ok(Some(admin))
    }
}
