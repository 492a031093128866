//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging, then hands the
//! resulting configuration to the Axum server.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use extrack_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env fallbacks can see it
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.server_config();

    tracing::info!(
        port = config.port,
        database_url = %config.database_url,
        "Starting extrack"
    );

    extrack_axum::start_server(config).await
}
