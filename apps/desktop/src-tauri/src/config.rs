//! # Desktop Configuration
//!
//! Resolves where the SQLite file lives.
//!
//! ## Platform-Specific Paths
//! - **macOS**: `~/Library/Application Support/com.inventory.desktop/inventory.db`
//! - **Windows**: `%APPDATA%\inventory\desktop\data\inventory.db`
//! - **Linux**: `~/.local/share/desktop/inventory.db`
//!
//! ## Development Override
//! Set `INVENTORY_DB_PATH` to use a custom path.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{DesktopError, DesktopResult};

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "INVENTORY_DB_PATH";

/// File name inside the platform data directory.
pub const DB_FILE_NAME: &str = "inventory.db";

/// Determines the database file path, creating its directory if needed.
pub fn database_path() -> DesktopResult<PathBuf> {
    resolve_database_path(std::env::var(DB_PATH_ENV).ok())
}

fn resolve_database_path(override_path: Option<String>) -> DesktopResult<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs =
        ProjectDirs::from("com", "inventory", "desktop").ok_or(DesktopError::NoDataDir)?;
    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir).map_err(|source| DesktopError::CreateDataDir {
        path: data_dir.to_path_buf(),
        source,
    })?;

    Ok(data_dir.join(DB_FILE_NAME))
}
