use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all signin users in creation order
    pub async fn list(&self) -> Result<Vec<entity::signin_user::Model>, DbErr> {
        entity::prelude::SigninUser::find()
            .order_by_asc(entity::signin_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, username: &str) -> Result<Option<entity::signin_user::Model>, DbErr> {
        entity::prelude::SigninUser::find()
            .filter(entity::signin_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Creates the user, or replaces the password hash and active flag of an existing user
    /// with the same username
    pub async fn upsert(
        &self,
        username: &str,
        password_hash: String,
        active: bool,
    ) -> Result<entity::signin_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        if let Some(user) = self.get(username).await? {
            let mut user_am = user.into_active_model();
            user_am.password_hash = ActiveValue::Set(password_hash);
            user_am.active = ActiveValue::Set(active);
            user_am.updated_at = ActiveValue::Set(now);

            return user_am.update(self.db).await;
        }

        let user = entity::signin_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            active: ActiveValue::Set(active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Applies a partial update to an existing user; fields passed as `None` keep their
    /// stored value
    ///
    /// Returns `Ok(None)` if no user with `username` exists.
    pub async fn update(
        &self,
        username: &str,
        password_hash: Option<String>,
        active: Option<bool>,
    ) -> Result<Option<entity::signin_user::Model>, DbErr> {
        let user = match self.get(username).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(password_hash) = password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(active) = active {
            user_am.active = ActiveValue::Set(active);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, username: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::SigninUser::delete_many()
            .filter(entity::signin_user::Column::Username.eq(username))
            .exec(self.db)
            .await
    }
}
