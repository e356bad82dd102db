//! # Inventory RPC Server
//!
//! Serves `inventory.v1.InventoryService` until Ctrl+C / SIGTERM.

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn")),
        )
        .with_target(true)
        .init();

    info!("Starting inventory RPC server...");

    inventory_rpc::run().await?;

    Ok(())
}
