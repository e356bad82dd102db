//! Error types for the RPC server.
//!
//! Store outcomes never become errors here: they are rendered into the reply
//! string. These are the failures that stop the process from serving.

use inventory_db::DbError;

use crate::config::ConfigError;

/// RPC server errors.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}
