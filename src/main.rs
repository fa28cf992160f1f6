use airwatch::api::AppState;
use airwatch::{AirwatchConfig, SiteFeed, web};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AirwatchConfig::load().with_context(|| "Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Airwatch v{} starting", airwatch::VERSION);

    let feed = SiteFeed::load_from_file(&config.feed.sites_path)
        .with_context(|| format!("Failed to load site feed from {}", config.feed.sites_path))?;

    if feed.is_empty() {
        tracing::warn!("Site feed is empty, the map will have no markers");
    }

    let state = AppState::new(feed);
    web::run(state, config.server.port).await;

    Ok(())
}
