//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Adapter (form / rpc / http)                                           │
//! │       │                                                                 │
//! │       │  store.get_by_id(1)        (Arc<dyn ProductStore>)             │
//! │       ▼                                                                 │
//! │  SqliteProductStore                                                    │
//! │  ├── create(&self, new_product)                                        │
//! │  ├── get_all(&self)                                                    │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update(&self, id, changes)                                        │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
