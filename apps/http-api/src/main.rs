//! # Inventory HTTP Server
//!
//! Serves `/products` until Ctrl+C / SIGTERM.

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn,tower_http=debug")),
        )
        .init();

    info!("Starting inventory HTTP server...");

    inventory_http::run().await?;

    Ok(())
}
