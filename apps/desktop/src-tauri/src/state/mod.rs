//! # State Module
//!
//! Application state managed by Tauri and injected into commands.
//!
//! The inventory window needs a single piece of state: the product store.
//! Commands declare it with `State<'_, DbState>`.

mod db;

pub use db::DbState;
