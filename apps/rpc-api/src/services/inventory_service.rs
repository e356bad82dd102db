//! Inventory gRPC service implementation.
//!
//! Each procedure makes one store call and answers with a single string.
//!
//! ## Reply Mapping
//! ```text
//! ┌───────────────────────────┬──────────────────────────────────────────────────┐
//! │ Store outcome             │ ProductReply.message (status OK)                 │
//! ├───────────────────────────┼──────────────────────────────────────────────────┤
//! │ create Ok                 │ Product {name} created successfully.             │
//! │ get Some                  │ ID: 1, Name: Widget, Quantity: 10, Price: 2.5    │
//! │ update Ok                 │ Product {id} updated.                            │
//! │ delete Ok                 │ Product {id} deleted.                            │
//! │ Validation                │ Invalid input: quantity and price must ...       │
//! │ NotFound / get None       │ Product not found.                               │
//! │ Conflict / Persistence    │ Error: {message}                                 │
//! └───────────────────────────┴──────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use inventory_core::{NewProduct, Product, ProductChanges, ProductStore, StoreError};

use crate::proto::{
    inventory_service_server::InventoryService, CreateProductRequest, DeleteProductRequest,
    GetProductRequest, ProductReply, UpdateProductRequest,
};

pub const MSG_INVALID: &str = "Invalid input: quantity and price must be non-negative.";
pub const MSG_NOT_FOUND: &str = "Product not found.";

/// Inventory service implementation.
pub struct InventoryServiceImpl {
    store: Arc<dyn ProductStore>,
}

impl InventoryServiceImpl {
    /// Create a new inventory service over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        InventoryServiceImpl { store }
    }
}

fn reply(message: impl Into<String>) -> Response<ProductReply> {
    Response::new(ProductReply {
        message: message.into(),
    })
}

fn describe(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Quantity: {}, Price: {:?}",
        product.id, product.name, product.quantity, product.price
    )
}

fn failure_text(err: &StoreError) -> String {
    match err {
        StoreError::Validation(_) => MSG_INVALID.to_string(),
        StoreError::NotFound(_) => MSG_NOT_FOUND.to_string(),
        StoreError::Conflict(_) | StoreError::Persistence(_) => {
            warn!(error = %err, "Store operation failed");
            format!("Error: {err}")
        }
    }
}

#[tonic::async_trait]
impl InventoryService for InventoryServiceImpl {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();
        debug!(id = req.id, name = %req.name, "CreateProduct");

        let input = NewProduct::with_id(req.id, req.name, req.quantity, req.price);
        let message = match self.store.create(input).await {
            Ok(product) => format!("Product {} created successfully.", product.name),
            Err(e) => failure_text(&e),
        };

        Ok(reply(message))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let id = request.into_inner().id;
        debug!(id, "GetProduct");

        let message = match self.store.get_by_id(id).await {
            Ok(Some(product)) => describe(&product),
            Ok(None) => MSG_NOT_FOUND.to_string(),
            Err(e) => failure_text(&e),
        };

        Ok(reply(message))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();
        debug!(id = req.id, "UpdateProduct");

        let changes = ProductChanges::new(req.name, req.quantity, req.price);
        let message = match self.store.update(req.id, changes).await {
            Ok(product) => format!("Product {} updated.", product.id),
            Err(e) => failure_text(&e),
        };

        Ok(reply(message))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let id = request.into_inner().id;
        debug!(id, "DeleteProduct");

        let message = match self.store.delete(id).await {
            Ok(()) => format!("Product {id} deleted."),
            Err(e) => failure_text(&e),
        };

        Ok(reply(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::{Database, DbConfig};

    async fn service() -> (Database, InventoryServiceImpl) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = InventoryServiceImpl::new(db.product_store());
        (db, service)
    }

    async fn create(svc: &InventoryServiceImpl, id: i64, name: &str, qty: i64, price: f64) -> String {
        svc.create_product(Request::new(CreateProductRequest {
            id,
            name: name.to_string(),
            quantity: qty,
            price,
        }))
        .await
        .unwrap()
        .into_inner()
        .message
    }

    async fn get(svc: &InventoryServiceImpl, id: i64) -> String {
        svc.get_product(Request::new(GetProductRequest { id }))
            .await
            .unwrap()
            .into_inner()
            .message
    }

    async fn update(svc: &InventoryServiceImpl, id: i64, name: &str, qty: i64, price: f64) -> String {
        svc.update_product(Request::new(UpdateProductRequest {
            id,
            name: name.to_string(),
            quantity: qty,
            price,
        }))
        .await
        .unwrap()
        .into_inner()
        .message
    }

    async fn delete(svc: &InventoryServiceImpl, id: i64) -> String {
        svc.delete_product(Request::new(DeleteProductRequest { id }))
            .await
            .unwrap()
            .into_inner()
            .message
    }

    #[tokio::test]
    async fn test_widget_lifecycle_replies() {
        let (_db, svc) = service().await;

        assert_eq!(
            create(&svc, 1, "Widget", 10, 2.50).await,
            "Product Widget created successfully."
        );
        assert_eq!(
            get(&svc, 1).await,
            "ID: 1, Name: Widget, Quantity: 10, Price: 2.5"
        );
        assert_eq!(update(&svc, 1, "Widget", -1, 2.50).await, MSG_INVALID);
        assert_eq!(
            get(&svc, 1).await,
            "ID: 1, Name: Widget, Quantity: 10, Price: 2.5"
        );
        assert_eq!(delete(&svc, 1).await, "Product 1 deleted.");
        assert_eq!(get(&svc, 1).await, MSG_NOT_FOUND);
        assert_eq!(delete(&svc, 1).await, MSG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_values() {
        let (_db, svc) = service().await;

        assert_eq!(create(&svc, 1, "Widget", 1, -2.0).await, MSG_INVALID);
        assert_eq!(get(&svc, 1).await, MSG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_infinite_price_is_invalid() {
        let (_db, svc) = service().await;

        assert_eq!(create(&svc, 1, "Widget", 1, f64::INFINITY).await, MSG_INVALID);
        assert_eq!(get(&svc, 1).await, MSG_NOT_FOUND);

        create(&svc, 1, "Widget", 10, 2.50).await;
        assert_eq!(update(&svc, 1, "Widget", 10, f64::INFINITY).await, MSG_INVALID);
        assert_eq!(
            get(&svc, 1).await,
            "ID: 1, Name: Widget, Quantity: 10, Price: 2.5"
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_is_error_reply() {
        let (_db, svc) = service().await;
        create(&svc, 1, "Widget", 10, 2.50).await;

        assert_eq!(
            create(&svc, 1, "Other", 1, 1.0).await,
            "Error: Product 1 already exists"
        );
    }

    #[tokio::test]
    async fn test_update_replies() {
        let (_db, svc) = service().await;
        create(&svc, 1, "Widget", 10, 2.50).await;

        assert_eq!(update(&svc, 1, "Widget v2", 3, 3.0).await, "Product 1 updated.");
        assert_eq!(
            get(&svc, 1).await,
            "ID: 1, Name: Widget v2, Quantity: 3, Price: 3.0"
        );
        assert_eq!(update(&svc, 2, "Ghost", 1, 1.0).await, MSG_NOT_FOUND);
        // Validation is checked before existence
        assert_eq!(update(&svc, 2, "Ghost", -1, 1.0).await, MSG_INVALID);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_error_reply() {
        let (db, svc) = service().await;
        db.close().await;

        let message = get(&svc, 1).await;
        assert!(message.starts_with("Error: Persistence error"), "{message}");
    }
}
