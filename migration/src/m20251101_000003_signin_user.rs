use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SigninUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SigninUser::Id))
                    .col(string_uniq(SigninUser::Username))
                    .col(string(SigninUser::PasswordHash))
                    .col(boolean(SigninUser::Active))
                    .col(timestamp(SigninUser::CreatedAt))
                    .col(timestamp(SigninUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SigninUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SigninUser {
    Table,
    Id,
    Username,
    PasswordHash,
    Active,
    CreatedAt,
    UpdatedAt,
}
