//! # Desktop Error Type
//!
//! Failures while starting the desktop app. Once the window is up, every
//! store outcome is rendered as form text instead of an error.

use std::path::PathBuf;

use inventory_db::DbError;
use thiserror::Error;

/// Startup errors.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// No home directory, so no platform data dir either.
    #[error("Could not determine app data directory")]
    NoDataDir,

    /// The data directory exists on paper but could not be created.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening the database or running migrations failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The Tauri runtime failed to build the window.
    #[error("GUI error: {0}")]
    Gui(String),
}

pub type DesktopResult<T> = Result<T, DesktopError>;
