//! # Inventory RPC API
//!
//! gRPC front end for the product store (`inventory.v1.InventoryService`).
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  gRPC client ──► tonic Server ──► InventoryServiceImpl                 │
//! │                  (port 50051)          │                                │
//! │                                        │ Arc<dyn ProductStore>          │
//! │                                        ▼                                │
//! │                                  SqliteProductStore ──► SQLite         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RPC_PORT` - gRPC server port (default: 50051)
//! - `INVENTORY_DB_PATH` - SQLite database file (default: inventory.db)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

pub mod config;
pub mod error;
#[allow(clippy::all)]
pub mod proto;
pub mod services;

use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use inventory_core::ProductStore;
use inventory_db::Database;

use crate::proto::inventory_service_server::InventoryServiceServer;
use crate::services::InventoryServiceImpl;

// Re-exports
pub use config::RpcConfig;
pub use error::RpcError;

/// Builds the tonic service over the given store.
pub fn inventory_server(store: Arc<dyn ProductStore>) -> InventoryServiceServer<InventoryServiceImpl> {
    InventoryServiceServer::new(InventoryServiceImpl::new(store))
}

/// Runs the server until a shutdown signal arrives.
///
/// ## Lifecycle
/// 1. Load configuration from the environment
/// 2. Open the database (runs migrations)
/// 3. Serve until Ctrl+C / SIGTERM
/// 4. Close the connection pool
pub async fn run() -> Result<(), RpcError> {
    let config = RpcConfig::load()?;
    info!(
        port = config.rpc_port,
        db = %config.database_path.display(),
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let addr = config.listen_addr();
    info!(%addr, "Starting gRPC server");

    let served = Server::builder()
        .add_service(inventory_server(db.product_store()))
        .serve_with_shutdown(addr, shutdown_signal())
        .await;

    db.close().await;
    served?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::inventory_service_client::InventoryServiceClient;
    use crate::proto::{
        CreateProductRequest, DeleteProductRequest, GetProductRequest, UpdateProductRequest,
    };
    use inventory_db::DbConfig;
    use tokio::net::TcpListener;
    use tokio_stream::wrappers::TcpListenerStream;

    #[tokio::test]
    async fn test_widget_lifecycle_over_loopback() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(
            Server::builder()
                .add_service(inventory_server(db.product_store()))
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
                    let _ = stop_rx.await;
                }),
        );

        let mut client = InventoryServiceClient::connect(format!("http://{addr}"))
            .await
            .unwrap();

        let message = client
            .create_product(CreateProductRequest {
                id: 1,
                name: "Widget".to_string(),
                quantity: 10,
                price: 2.50,
            })
            .await
            .unwrap()
            .into_inner()
            .message;
        assert_eq!(message, "Product Widget created successfully.");

        let message = client
            .get_product(GetProductRequest { id: 1 })
            .await
            .unwrap()
            .into_inner()
            .message;
        assert_eq!(message, "ID: 1, Name: Widget, Quantity: 10, Price: 2.5");

        // Domain failures travel with status OK
        let response = client
            .update_product(UpdateProductRequest {
                id: 1,
                name: "Widget".to_string(),
                quantity: -1,
                price: 2.50,
            })
            .await
            .unwrap();
        assert_eq!(
            response.into_inner().message,
            "Invalid input: quantity and price must be non-negative."
        );

        let message = client
            .delete_product(DeleteProductRequest { id: 1 })
            .await
            .unwrap()
            .into_inner()
            .message;
        assert_eq!(message, "Product 1 deleted.");

        let message = client
            .delete_product(DeleteProductRequest { id: 1 })
            .await
            .unwrap()
            .into_inner()
            .message;
        assert_eq!(message, "Product not found.");

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
