//! RPC server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable             | Default        |
//! |----------------------|----------------|
//! | `RPC_PORT`           | `50051`        |
//! | `INVENTORY_DB_PATH`  | `inventory.db` |
//! | `DB_MAX_CONNECTIONS` | `5`            |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use inventory_db::DbConfig;

/// RPC server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcConfig {
    /// gRPC server port
    pub rpc_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,
}

impl RpcConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = RpcConfig {
            rpc_port: lookup("RPC_PORT")
                .unwrap_or_else(|| "50051".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RPC_PORT".to_string()))?,

            database_path: lookup("INVENTORY_DB_PATH")
                .unwrap_or_else(|| "inventory.db".to_string())
                .into(),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.rpc_port))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
