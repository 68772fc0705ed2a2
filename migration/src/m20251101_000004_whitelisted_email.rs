use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhitelistedEmail::Table)
                    .if_not_exists()
                    .col(pk_auto(WhitelistedEmail::Id))
                    .col(string_uniq(WhitelistedEmail::Email))
                    .col(timestamp(WhitelistedEmail::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WhitelistedEmail::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WhitelistedEmail {
    Table,
    Id,
    Email,
    CreatedAt,
}
