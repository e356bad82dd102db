//! # Product Repository
//!
//! SQLite implementation of [`ProductStore`].
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Operation = One Transaction                      │
//! │                                                                         │
//! │  validate_stock_fields(quantity, price)   ← create / update only       │
//! │       │  (failure: return before touching the pool)                     │
//! │       ▼                                                                 │
//! │  pool.begin()            ← acquire a connection, BEGIN                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  single INSERT / UPDATE / DELETE statement                              │
//! │       │                                                                 │
//! │       ├── error or no row ──► tx dropped: ROLLBACK, connection released │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tx.commit()             ← COMMIT, connection released                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads (`get_all`, `get_by_id`) run one SELECT on a pooled connection
//! without an explicit transaction.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use inventory_core::validation::validate_stock_fields;
use inventory_core::{
    NewProduct, Product, ProductChanges, ProductId, ProductStore, StoreError, StoreResult,
};

use crate::error::{DbError, DbResult};

/// Column list shared by every query returning a full row.
const PRODUCT_COLUMNS: &str = "id, name, quantity, price";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let store = SqliteProductStore::new(pool);
///
/// store.create(NewProduct::with_id(1, "Widget", 10, 2.5)).await?;
/// let product = store.get_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Creates a new SqliteProductStore.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductStore { pool }
    }

    /// Counts stored products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Converts a sqlx error into the store taxonomy.
fn store_error(err: sqlx::Error) -> StoreError {
    DbError::from(err).into()
}

/// Converts a failed BEGIN or COMMIT into the store taxonomy.
fn transaction_error(err: sqlx::Error) -> StoreError {
    DbError::TransactionFailed(err.to_string()).into()
}

/// Maps an INSERT failure, turning a primary key violation into `Conflict`.
fn insert_error(err: sqlx::Error, id: Option<ProductId>) -> StoreError {
    let err = DbError::from(err);
    match id {
        Some(id) if err.is_unique_violation() => StoreError::Conflict(id),
        _ => err.into(),
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row (with the assigned id when none was given)
    /// * `Err(StoreError::Validation)` - Negative quantity or price
    /// * `Err(StoreError::Conflict)` - The id already exists
    async fn create(&self, input: NewProduct) -> StoreResult<Product> {
        debug!(id = ?input.id, name = %input.name, "Creating product");

        validate_stock_fields(input.quantity, input.price)?;

        let mut tx = self.pool.begin().await.map_err(transaction_error)?;

        let sql = format!(
            "INSERT INTO products (id, name, quantity, price) VALUES (?1, ?2, ?3, ?4) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| insert_error(e, input.id))
            .inspect_err(|e| warn!(error = %e, "Product insert failed"))?;

        tx.commit().await.map_err(transaction_error)?;

        debug!(id = product.id, "Product created");
        Ok(product)
    }

    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(product)
    }

    /// Updates an existing product.
    ///
    /// Validation runs first: a negative value on an unknown id is a
    /// `Validation` error, not `NotFound`.
    async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product> {
        debug!(id = %id, "Updating product");

        validate_stock_fields(changes.quantity, changes.price)?;

        let mut tx = self.pool.begin().await.map_err(transaction_error)?;

        let sql = format!(
            "UPDATE products SET name = ?2, quantity = ?3, price = ?4 WHERE id = ?1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.quantity)
            .bind(changes.price)
            .fetch_optional(&mut *tx)
            .await
            .map_err(store_error)?;

        let Some(product) = updated else {
            return Err(StoreError::NotFound(id));
        };

        tx.commit().await.map_err(transaction_error)?;

        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let mut tx = self.pool.begin().await.map_err(transaction_error)?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await.map_err(transaction_error)?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
