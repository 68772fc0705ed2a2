use sea_orm::{ConnectionTrait, DatabaseConnection};
use tower_sessions::SessionManagerLayer;

use crate::{
    model::settings::FetchMode,
    server::{
        client::SigninCodeClient,
        config::Config,
        data::{admin::AdminRepository, settings::SettingsRepository},
        error::{config::ConfigError, Error},
        session_store::SessionMemoryStore,
        util::password::hash_password,
    },
};

pub const SESSION_COOKIE_NAME: &str = "codegate.sid";

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Configure the in-memory session store
///
/// Sessions are lost on restart. Login pins each session to an absolute expiry, the
/// inactivity expiry here only covers anonymous sessions. Expired records stay in `store`
/// until its cleanup task sweeps them.
pub fn build_session_layer(
    config: &Config,
    store: SessionMemoryStore,
) -> SessionManagerLayer<SessionMemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(8)))
}

/// Build the outbound client for the signin-code source
pub fn build_signincode_client(config: &Config) -> Result<SigninCodeClient, Error> {
    let client = SigninCodeClient::new(config.fetch_timeout)?;

    Ok(client)
}

/// Seed the admin record and the settings row when they do not exist yet
///
/// Existing rows are never overwritten, so admin edits survive restarts.
pub async fn seed_defaults<C: ConnectionTrait>(db: &C, config: &Config) -> Result<(), Error> {
    let admin_repo = AdminRepository::new(db);
    if admin_repo.get().await?.is_none() {
        let password = config
            .admin_password
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?;

        admin_repo
            .create(config.admin_username.clone(), hash_password(password).await?)
            .await?;

        tracing::info!(username = %config.admin_username, "Seeded admin account");
    }

    let settings_repo = SettingsRepository::new(db);
    if settings_repo.get().await?.is_none() {
        settings_repo
            .create(
                config.signincode_source_url.clone(),
                config.signincode_password.clone(),
                FetchMode::Curl,
            )
            .await?;

        tracing::info!(source_url = %config.signincode_source_url, "Seeded settings");
    }

    Ok(())
}
