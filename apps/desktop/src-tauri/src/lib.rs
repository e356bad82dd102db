//! # inventory-desktop: Desktop Form for the Inventory Workspace
//!
//! A single window with four text fields (id, name, quantity, price), four
//! buttons (Create, View All, Update, Delete) and a read-only output region.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form        ◄── InventoryForm::submit (headless, always built)        │
//! │  state       ◄── DbState: Database + Arc<dyn ProductStore>             │
//! │  config      ◄── Database path resolution                              │
//! │  error       ◄── Startup errors                                        │
//! │  commands    ◄── Tauri commands (feature "gui")                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The Tauri window is behind the `gui` feature so the form logic builds and
//! tests without a WebView toolchain.

pub mod config;
pub mod error;
pub mod form;
pub mod state;

#[cfg(feature = "gui")]
pub mod commands;

use tracing_subscriber::EnvFilter;

pub use form::{FormAction, InventoryForm};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inventory=trace` - Show trace for inventory crates only
/// - Default: INFO, DEBUG for inventory crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • INVENTORY_DB_PATH, else the platform data directory               │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Manage DbState                                                    │
/// │     • Register the four form commands                                   │
/// │     • Launch window                                                     │
/// │                                                                         │
/// │  5. Window closed ────────────────────────────────────────────────────► │
/// │     • Close the connection pool                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[cfg(feature = "gui")]
pub fn run() -> Result<(), error::DesktopError> {
    use inventory_db::{Database, DbConfig};
    use tauri::Manager;
    use tracing::info;

    use state::DbState;

    init_tracing();

    info!("Starting inventory desktop application");

    let app = tauri::Builder::default()
        // Setup hook runs before the window opens
        .setup(|app| {
            let db_path = config::database_path()?;
            info!(?db_path, "Database path determined");

            let db = tauri::async_runtime::block_on(async {
                Database::new(DbConfig::new(db_path)).await
            })?;

            info!("Database connected and migrations applied");

            app.manage(DbState::new(db));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::product::create_product,
            commands::product::view_products,
            commands::product::update_product,
            commands::product::delete_product,
        ])
        .build(tauri::generate_context!())
        .map_err(|e| error::DesktopError::Gui(e.to_string()))?;

    app.run(|handle, event| {
        if let tauri::RunEvent::Exit = event {
            if let Some(state) = handle.try_state::<DbState>() {
                tauri::async_runtime::block_on(state.database().close());
            }
        }
    });

    Ok(())
}
