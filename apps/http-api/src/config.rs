//! HTTP server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable             | Default        |
//! |----------------------|----------------|
//! | `HTTP_PORT`          | `8080`         |
//! | `INVENTORY_DB_PATH`  | `inventory.db` |
//! | `DB_MAX_CONNECTIONS` | `5`            |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use inventory_db::DbConfig;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// Listen port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,
}

impl HttpConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http_port = lookup("HTTP_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?;

        let database_path = lookup("INVENTORY_DB_PATH")
            .unwrap_or_else(|| "inventory.db".to_string())
            .into();

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
        {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string())),
        };

        Ok(HttpConfig {
            http_port,
            database_path,
            db_max_connections,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.http_port))
    }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_path, PathBuf::from("inventory.db"));
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn test_port_override() {
        let config = HttpConfig::from_lookup(|key| match key {
            "HTTP_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.listen_addr().port(), 9090);
    }

    #[test]
    fn test_invalid_pool_size() {
        let err = HttpConfig::from_lookup(|key| match key {
            "DB_MAX_CONNECTIONS" => Some("-3".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_MAX_CONNECTIONS");
    }
}
