use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct EmailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmailRepository<'a, C> {
    /// Creates a new instance of [`EmailRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists whitelisted emails in the order they were added
    pub async fn list(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::WhitelistedEmail::find()
            .select_only()
            .column(entity::whitelisted_email::Column::Email)
            .order_by_asc(entity::whitelisted_email::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Exact-match membership test
    pub async fn contains(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::WhitelistedEmail::find()
            .filter(entity::whitelisted_email::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds an email to the whitelist
    ///
    /// Adding an email that is already present is a no-op.
    pub async fn add(&self, email: &str) -> Result<(), DbErr> {
        let email = entity::whitelisted_email::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::WhitelistedEmail::insert(email)
            .on_conflict(
                OnConflict::column(entity::whitelisted_email::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes an email from the whitelist, returning whether it was present
    pub async fn remove(&self, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::WhitelistedEmail::delete_many()
            .filter(entity::whitelisted_email::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
