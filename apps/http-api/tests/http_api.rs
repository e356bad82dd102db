//! Handler tests for the `/products` routes
//!
//! Each test builds the router over a fresh in-memory database and drives it
//! with `oneshot`, checking status codes and JSON bodies.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use inventory_core::Product;
use inventory_db::{Database, DbConfig};
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

async fn test_app() -> (Database, Router) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = inventory_http::router(db.product_store());
    (db, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn widget() -> Value {
    json!({ "id": 1, "name": "Widget", "quantity": 10, "price": 2.50 })
}

#[tokio::test]
async fn test_widget_lifecycle() {
    let (_db, app) = test_app().await;

    let (status, body) = send(&app, "POST", "/products", Some(widget())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, widget());

    let (status, body) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let product: Product = serde_json::from_value(body).unwrap();
    assert_eq!(product.name, "Widget");
    assert_eq!(product.quantity, 10);

    let (status, _) = send(
        &app,
        "PUT",
        "/products/1",
        Some(json!({ "name": "Widget", "quantity": -1, "price": 2.50 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(body["quantity"], 10);

    let (status, body) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Product deleted" }));

    let (status, body) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Product not found" }));

    let (status, _) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products() {
    let (_db, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    send(&app, "POST", "/products", Some(widget())).await;
    send(
        &app,
        "POST",
        "/products",
        Some(json!({ "id": 2, "name": "Gadget", "quantity": 0, "price": 3.0 })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut products: Vec<Product> = serde_json::from_value(body).unwrap();
    products.sort_by_key(|p| p.id);
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "Gadget");
}

#[tokio::test]
async fn test_create_without_id_is_assigned() {
    let (_db, app) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Auto", "quantity": 1, "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_negative_values_is_422() {
    let (_db, app) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "id": 1, "name": "Widget", "quantity": 1, "price": -0.01 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("price"));

    let (_, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_duplicate_create_is_409() {
    let (_db, app) = test_app().await;
    send(&app, "POST", "/products", Some(widget())).await;

    let (status, body) = send(&app, "POST", "/products", Some(widget())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "detail": "Product 1 already exists" }));
}

#[tokio::test]
async fn test_update_product() {
    let (_db, app) = test_app().await;
    send(&app, "POST", "/products", Some(widget())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/products/1",
        Some(json!({ "name": "Widget v2", "quantity": 4, "price": 3.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Widget v2", "quantity": 4, "price": 3.5 })
    );

    let (status, body) = send(
        &app,
        "PUT",
        "/products/2",
        Some(json!({ "name": "Ghost", "quantity": 1, "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn test_update_validates_before_existence() {
    let (_db, app) = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/products/99",
        Some(json!({ "name": "Ghost", "quantity": -1, "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("quantity"));
}

#[tokio::test]
async fn test_non_integer_id_is_400() {
    let (_db, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let (_db, app) = test_app().await;

    // Wrong type for quantity
    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "id": 1, "name": "Widget", "quantity": "ten", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Missing content type
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .body(Body::from(widget().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let (db, app) = test_app().await;
    db.close().await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Internal server error" }));
}
