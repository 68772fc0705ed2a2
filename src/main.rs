use codegate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    sanitize::HtmlSanitizer,
    session_store::{spawn_session_cleanup, SessionMemoryStore, SESSION_CLEANUP_INTERVAL},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    if let Err(e) = startup::seed_defaults(&db, &config).await {
        eprintln!("Failed to seed defaults: {}", e);
        std::process::exit(1);
    }

    let signincode_client = startup::build_signincode_client(&config)?;
    let sanitizer = HtmlSanitizer::new(config.strip_event_handlers);
    let session_store = SessionMemoryStore::default();
    spawn_session_cleanup(session_store.clone(), SESSION_CLEANUP_INTERVAL);
    let session = startup::build_session_layer(&config, session_store);

    let app = router::routes()
        .with_state(AppState::new(db, signincode_client, sanitizer))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
