//! # Inventory HTTP API
//!
//! JSON resource API over the product store, served with axum.
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - listen port (default: 8080)
//! - `INVENTORY_DB_PATH` - SQLite database file (default: inventory.db)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

pub mod config;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use inventory_db::Database;

pub use config::HttpConfig;
pub use error::ApiError;
pub use handlers::AppState;

/// Server start-up errors.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] inventory_db::DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the `/products` router over the given store.
pub fn router(store: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Runs the server until a shutdown signal arrives, then closes the pool.
pub async fn run() -> Result<(), ServeError> {
    let config = HttpConfig::load()?;
    info!(
        port = config.http_port,
        db = %config.database_path.display(),
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    let served = axum::serve(listener, router(db.product_store()))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
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
