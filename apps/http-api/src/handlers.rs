//! Product route handlers.
//!
//! Request bodies are checked against the stock invariant before the store is
//! called. The store checks again, so the two can never disagree.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use inventory_core::validation::validate_stock_fields;
use inventory_core::{NewProduct, Product, ProductChanges, ProductId, ProductStore};

use crate::error::{ApiError, ApiResult};

/// Shared handler state.
pub type AppState = Arc<dyn ProductStore>;

/// `POST /products`
pub async fn create_product(
    State(store): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(input) = body?;
    debug!(id = ?input.id, name = %input.name, "POST /products");

    validate_stock_fields(input.quantity, input.price)?;

    let product = store.create(input).await?;
    Ok(Json(product))
}

/// `GET /products`
pub async fn list_products(State(store): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = store.get_all().await?;
    Ok(Json(products))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(store): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;

    store
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `PUT /products/{id}`
pub async fn update_product(
    State(store): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ProductChanges>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(changes) = body?;
    debug!(id, "PUT /products/{{id}}");

    validate_stock_fields(changes.quantity, changes.price)?;

    let product = store.update(id, changes).await?;
    Ok(Json(product))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(store): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id?;

    store.delete(id).await?;
    Ok(Json(json!({ "message": "Product deleted" })))
}
