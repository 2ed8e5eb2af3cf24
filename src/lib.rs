pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod db;
pub mod matcher;
pub mod models;
pub mod pharmacies;
pub mod report;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::catalog::{CatalogError, CatalogStore};
use crate::config::ServerConfig;
use crate::matcher::Matcher;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber. A second call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Open the catalog database, optionally re-seed it, and build the matcher.
pub fn build_matcher(config: &ServerConfig) -> Result<Matcher, StartupError> {
    let mut conn = db::open_database(&config.db_path).map_err(CatalogError::from)?;
    let catalog = if config.seed_on_start {
        CatalogStore::seeded(&mut conn)?
    } else {
        CatalogStore::open(&conn)?
    };
    if catalog.is_empty() {
        tracing::warn!(db = %config.db_path.display(), "Medicine catalog is empty");
    }
    Ok(Matcher::new(Arc::new(catalog)).with_search_case(config.search_case))
}

/// Run the server until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    tracing::info!(
        db = %config.db_path.display(),
        seed = config.seed_on_start,
        search_case = config.search_case.as_str(),
        "Configuration loaded"
    );

    let matcher = build_matcher(&config)?;
    let ctx = api::ApiContext::new(Arc::new(matcher)).with_max_message_len(config.max_message_len);
    let app = api::app_router(ctx, Some(&config.public_dir));

    let server = api::start_server(app, config.bind_addr)
        .await
        .map_err(StartupError::Server)?;
    tracing::info!(
        "{} server running on http://{}",
        config::APP_NAME,
        server.session.server_addr
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.stopped().await;
    Ok(())
}
