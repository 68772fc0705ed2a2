pub use sea_orm_migration::prelude::*;

mod m20251101_000001_settings;
mod m20251101_000002_admin;
mod m20251101_000003_signin_user;
mod m20251101_000004_whitelisted_email;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_settings::Migration),
            Box::new(m20251101_000002_admin::Migration),
            Box::new(m20251101_000003_signin_user::Migration),
            Box::new(m20251101_000004_whitelisted_email::Migration),
        ]
    }
}
