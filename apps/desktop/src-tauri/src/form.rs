//! # Inventory Form
//!
//! Headless controller behind the desktop window: four text fields, four
//! buttons, one output region.
//!
//! ## Button Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Form Submission                                  │
//! │                                                                         │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐                   │
//! │  │  Create  │ │ View All │ │  Update  │ │  Delete  │                   │
//! │  └────┬─────┘ └────┬─────┘ └────┬─────┘ └────┬─────┘                   │
//! │       │            │            │            │                          │
//! │       ▼            │            ▼            ▼                          │
//! │  parse id, quantity, price      │       parse id                        │
//! │  trim name                      │            │                          │
//! │       │            │            │            │                          │
//! │       ▼            ▼            ▼            ▼                          │
//! │   store.create  get_all   store.update  store.delete                    │
//! │       │            │            │            │                          │
//! │       └────────────┴─────┬──────┴────────────┘                          │
//! │                          ▼                                              │
//! │            text that replaces the output region                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every button makes exactly one store call, except when a field fails to
//! parse, in which case no store call is made.

use serde::Deserialize;
use tracing::debug;

use inventory_core::validation::{parse_id, parse_price, parse_quantity};
use inventory_core::{
    NewProduct, Product, ProductChanges, ProductStore, StoreError, ValidationError,
};

pub const MSG_CREATED: &str = "✅ Product created.";
pub const MSG_UPDATED: &str = "✅ Product updated.";
pub const MSG_DELETED: &str = "✅ Product deleted.";
pub const MSG_INVALID: &str = "❌ Quantity and price must be ≥ 0.";
pub const MSG_NOT_FOUND: &str = "❌ Product not found.";
pub const MSG_EMPTY: &str = "ℹ️ No products found.";

/// The four buttons of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    ViewAll,
    Update,
    Delete,
}

/// Raw text of the form's input fields.
///
/// Deserialized straight from the frontend's `invoke` payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InventoryForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
}

/// Typed values of a fully filled form.
struct ParsedFields {
    id: i64,
    name: String,
    quantity: i64,
    price: f64,
}

impl InventoryForm {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        InventoryForm {
            id: id.into(),
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Runs one button press against the store and returns the output text.
    pub async fn submit(&self, action: FormAction, store: &dyn ProductStore) -> String {
        debug!(?action, id = %self.id, "Form submitted");

        match action {
            FormAction::Create => self.create(store).await,
            FormAction::ViewAll => view_all(store).await,
            FormAction::Update => self.update(store).await,
            FormAction::Delete => self.delete(store).await,
        }
    }

    async fn create(&self, store: &dyn ProductStore) -> String {
        let fields = match self.parse_all() {
            Ok(fields) => fields,
            Err(e) => return error_text(&e),
        };

        let input = NewProduct::with_id(fields.id, fields.name, fields.quantity, fields.price);
        match store.create(input).await {
            Ok(_) => MSG_CREATED.to_string(),
            Err(e) => store_error_text(&e),
        }
    }

    async fn update(&self, store: &dyn ProductStore) -> String {
        let fields = match self.parse_all() {
            Ok(fields) => fields,
            Err(e) => return error_text(&e),
        };

        let changes = ProductChanges::new(fields.name, fields.quantity, fields.price);
        match store.update(fields.id, changes).await {
            Ok(_) => MSG_UPDATED.to_string(),
            Err(e) => store_error_text(&e),
        }
    }

    async fn delete(&self, store: &dyn ProductStore) -> String {
        let id = match parse_id(&self.id) {
            Ok(id) => id,
            Err(e) => return error_text(&e),
        };

        match store.delete(id).await {
            Ok(()) => MSG_DELETED.to_string(),
            Err(e) => store_error_text(&e),
        }
    }

    fn parse_all(&self) -> Result<ParsedFields, ValidationError> {
        Ok(ParsedFields {
            id: parse_id(&self.id)?,
            name: self.name.trim().to_string(),
            quantity: parse_quantity(&self.quantity)?,
            price: parse_price(&self.price)?,
        })
    }
}

async fn view_all(store: &dyn ProductStore) -> String {
    match store.get_all().await {
        Ok(products) => listing(&products),
        Err(e) => error_text(&e),
    }
}

/// One line per product, or the empty notice.
pub fn listing(products: &[Product]) -> String {
    if products.is_empty() {
        return MSG_EMPTY.to_string();
    }

    products
        .iter()
        .map(Product::display_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn error_text(err: &dyn std::fmt::Display) -> String {
    format!("❌ Error: {err}")
}

fn store_error_text(err: &StoreError) -> String {
    match err {
        StoreError::Validation(v) if v.is_negative_value() => MSG_INVALID.to_string(),
        StoreError::NotFound(_) => MSG_NOT_FOUND.to_string(),
        other => error_text(other),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_widget_lifecycle_messages() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new("1", "Widget", "10", "2.50");
        assert_eq!(form.submit(FormAction::Create, &*store).await, MSG_CREATED);
        assert_eq!(
            form.submit(FormAction::ViewAll, &*store).await,
            "1 | Widget | Qty: 10 | $2.50"
        );

        let bad = InventoryForm::new("1", "Widget", "-1", "2.50");
        assert_eq!(bad.submit(FormAction::Update, &*store).await, MSG_INVALID);
        assert_eq!(
            form.submit(FormAction::ViewAll, &*store).await,
            "1 | Widget | Qty: 10 | $2.50"
        );

        let delete = InventoryForm::new("1", "", "", "");
        assert_eq!(delete.submit(FormAction::Delete, &*store).await, MSG_DELETED);
        assert_eq!(delete.submit(FormAction::ViewAll, &*store).await, MSG_EMPTY);
        assert_eq!(delete.submit(FormAction::Delete, &*store).await, MSG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new(" 2 ", "  Gadget  ", "3", "1");
        assert_eq!(form.submit(FormAction::Create, &*store).await, MSG_CREATED);

        let product = store.get_by_id(2).await.unwrap().unwrap();
        assert_eq!(product.name, "Gadget");
    }

    #[tokio::test]
    async fn test_create_negative_price_is_rejected() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new("1", "Widget", "1", "-0.5");
        assert_eq!(form.submit(FormAction::Create, &*store).await, MSG_INVALID);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_field_reports_error() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new("1", "Widget", "ten", "2.50");
        let output = form.submit(FormAction::Create, &*store).await;
        assert!(output.starts_with("❌ Error: "), "{output}");
        assert!(output.contains("ten"));

        let form = InventoryForm::new("abc", "", "", "");
        let output = form.submit(FormAction::Delete, &*store).await;
        assert!(output.starts_with("❌ Error: "), "{output}");
    }

    #[tokio::test]
    async fn test_duplicate_create_reports_error() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new("1", "Widget", "10", "2.50");
        form.submit(FormAction::Create, &*store).await;

        let output = form.submit(FormAction::Create, &*store).await;
        assert_eq!(output, "❌ Error: Product 1 already exists");
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let db = test_db().await;
        let store = db.product_store();

        let form = InventoryForm::new("9", "Ghost", "1", "1.0");
        assert_eq!(form.submit(FormAction::Update, &*store).await, MSG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_changes_listing() {
        let db = test_db().await;
        let store = db.product_store();

        InventoryForm::new("1", "Widget", "10", "2.50")
            .submit(FormAction::Create, &*store)
            .await;
        InventoryForm::new("2", "Gadget", "0", "3")
            .submit(FormAction::Create, &*store)
            .await;

        let form = InventoryForm::new("1", "Widget v2", "4", "3.75");
        assert_eq!(form.submit(FormAction::Update, &*store).await, MSG_UPDATED);

        let listing = form.submit(FormAction::ViewAll, &*store).await;
        let mut lines: Vec<&str> = listing.lines().collect();
        lines.sort();
        assert_eq!(
            lines,
            vec!["1 | Widget v2 | Qty: 4 | $3.75", "2 | Gadget | Qty: 0 | $3.00"]
        );
    }

    #[tokio::test]
    async fn test_store_failure_reports_error() {
        let db = test_db().await;
        let store = db.product_store();
        db.close().await;

        let output = InventoryForm::default()
            .submit(FormAction::ViewAll, &*store)
            .await;
        assert!(output.starts_with("❌ Error: Persistence error"), "{output}");
    }

    #[test]
    fn test_form_payload_defaults_missing_fields() {
        let form: InventoryForm = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(form, InventoryForm::new("1", "", "", ""));
    }
}
