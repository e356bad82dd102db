//! # Domain Types
//!
//! The one entity of the inventory system and the inputs used to create and
//! modify it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │ ProductChanges  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64, PK)   │   │  id (Option)    │   │  name           │       │
//! │  │  name           │   │  name           │   │  quantity       │       │
//! │  │  quantity       │   │  quantity       │   │  price          │       │
//! │  │  price          │   │  price          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │       stored row          create input          update input           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The `id` is assigned by the caller, not generated. It never changes after
//! the product is created: [`ProductChanges`] has no id field.

use serde::{Deserialize, Serialize};

/// Primary key of a product.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// One inventory line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Externally assigned primary key.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Units in stock, never negative.
    pub quantity: i64,

    /// Unit price, never negative.
    pub price: f64,
}

impl Product {
    /// One-line listing used by the desktop "View All" output.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::Product;
    ///
    /// let p = Product { id: 1, name: "Widget".into(), quantity: 10, price: 2.5 };
    /// assert_eq!(p.display_line(), "1 | Widget | Qty: 10 | $2.50");
    /// ```
    pub fn display_line(&self) -> String {
        format!(
            "{} | {} | Qty: {} | ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Input for creating a product.
///
/// `id` is optional only for the HTTP binding, where the caller may leave the
/// key to the database. The desktop form and the RPC service always set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    /// Creates an input with an explicit id.
    pub fn with_id(id: ProductId, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            id: Some(id),
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Replacement values for an existing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl ProductChanges {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        ProductChanges {
            name: name.into(),
            quantity,
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
