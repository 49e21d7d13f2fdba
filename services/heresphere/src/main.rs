use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod models;
mod routes;
mod state;
mod timeline;
mod video_data;

use common::config::AppConfig;
use stash::StashClient;
use tokio::net::TcpListener;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting HereSphere service");

    let logged_config = if config.redact_disabled {
        config.clone()
    } else {
        config.redacted()
    };
    info!("Configuration: {:?}", logged_config);

    // Initialize Stash client
    let stash_client = StashClient::new(&config.stash)?;

    // Check Stash connectivity
    if stash_client.health_check().await? {
        info!("Stash connection successful");
    } else {
        warn!("Stash is not reachable, continuing anyway");
    }

    let app_state = AppState {
        stash_client,
        api_key: config.stash.api_key.clone(),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(config.listen_address).await?;
    info!("HereSphere service listening on {}", config.listen_address);

    axum::serve(listener, app).await?;

    Ok(())
}
