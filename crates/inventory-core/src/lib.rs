//! # inventory-core: Domain Model for the Inventory Workspace
//!
//! This crate holds the inventory domain with zero I/O dependencies: the
//! `Product` entity, its validation rule, the error taxonomy, and the
//! `ProductStore` contract that every transport adapter is written against.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │  Desktop form   │  │   gRPC service  │  │   HTTP router   │         │
//! │  │  (Tauri)        │  │   (tonic)       │  │   (axum)        │         │
//! │  └────────┬────────┘  └────────┬────────┘  └────────┬────────┘         │
//! │           └────────────────────┼────────────────────┘                  │
//! │                                │ Arc<dyn ProductStore>                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │   error   │  │   store   │  │   │
//! │  │   │  Product  │  │ is_valid  │  │StoreError │  │  trait    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventory-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and its create/update inputs
//! - [`validation`] - The non-negativity invariant and text parsers
//! - [`error`] - ValidationError and StoreError
//! - [`store`] - The ProductStore trait
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::validation::is_valid;
//! use inventory_core::NewProduct;
//!
//! let input = NewProduct::with_id(1, "Widget", 10, 2.50);
//! assert!(is_valid(input.quantity, input.price));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult, ValidationError};
pub use store::ProductStore;
pub use types::*;
