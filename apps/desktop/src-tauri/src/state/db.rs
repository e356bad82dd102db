//! # Database State
//!
//! Wraps the `Database` and the product store handed to the form.
//!
//! ## Thread Safety
//! The `Database` struct from `inventory-db` contains a `SqlitePool`, which
//! is thread-safe. Several commands can run store operations concurrently
//! without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! #[tauri::command]
//! async fn view_products(db: State<'_, DbState>) -> Result<String, ()> {
//!     Ok(InventoryForm::default().submit(FormAction::ViewAll, db.store()).await)
//! }
//! ```

use std::sync::Arc;

use inventory_core::ProductStore;
use inventory_db::Database;

/// Wrapper around `Database` for Tauri state management.
pub struct DbState {
    db: Database,
    store: Arc<dyn ProductStore>,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        let store = db.product_store();
        DbState { db, store }
    }

    /// Returns a reference to the wrapped Database.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The store every form action runs against.
    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState").field("db", &self.db).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::DbConfig;

    #[tokio::test]
    async fn test_store_shares_inner_pool() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = DbState::new(db);

        assert!(state.database().health_check().await);
        assert!(state.store().get_all().await.unwrap().is_empty());
    }
}
