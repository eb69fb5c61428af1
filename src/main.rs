//! Influencer Finder server
//!
//! This is the main entry point for the application.

use anyhow::Result;
use influencer_finder::{
    config,
    sources::EmbeddedSource,
    web::{create_router, AppState},
    Finder,
};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so `debug` can raise the level
    let loaded = config::load()?;
    let settings = loaded.settings;

    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting Influencer Finder v{}", influencer_finder::VERSION);
    match loaded.path {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    // Dataset served by the API endpoints
    let catalog = EmbeddedSource::new().load()?;
    info!("Embedded dataset holds {} profiles", catalog.len());

    // Resolve the collection shown by the UI
    let finder = Finder::from_settings(&settings)?;
    let browse = match finder.load().await {
        Ok(resolved) => Some(resolved),
        Err(e) => {
            error!("{}", e);
            None
        }
    };

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    let state = AppState::new(settings, finder, browse, catalog)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
