//! gRPC service implementations.

pub mod inventory_service;

pub use inventory_service::InventoryServiceImpl;
