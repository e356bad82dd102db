//! # Product Store Contract
//!
//! The capability set every transport adapter consumes:
//! `{create, get_all, get_by_id, update, delete}`.
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │ Desktop form │  │ RPC service  │  │ HTTP router  │
//! └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!        │                 │                 │
//!        └─────────────────┼─────────────────┘
//!                          ▼
//!              Arc<dyn ProductStore>
//!                          │
//!                          ▼
//!              SqliteProductStore (inventory-db)
//! ```
//!
//! Implementations live outside this crate; this module only states the
//! contract so that no adapter depends on a concrete database.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{NewProduct, Product, ProductChanges, ProductId};

/// Persistence for [`Product`] records.
///
/// ## Contract
/// - `create`: `Validation` if quantity or price is negative, `Conflict` if the
///   id is taken.
/// - `get_all`: possibly empty, order unspecified.
/// - `get_by_id`: `Ok(None)` when absent, never `NotFound`.
/// - `update`: input is validated **before** the existence check, so a
///   negative value on a missing id reports `Validation`.
/// - `delete`: `NotFound` if absent.
///
/// A failed operation leaves the store unchanged.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Creates a product.
    async fn create(&self, input: NewProduct) -> StoreResult<Product>;

    /// Lists every product.
    async fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// Gets a product by id.
    async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

    /// Overwrites name, quantity and price of an existing product.
    async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product>;

    /// Deletes a product.
    async fn delete(&self, id: ProductId) -> StoreResult<()>;
}
