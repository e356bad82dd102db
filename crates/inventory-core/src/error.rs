//! # Error Types
//!
//! Domain error taxonomy shared by every store implementation and adapter.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  ├── ValidationError  - Negative values, unparseable numbers           │
//! │  └── StoreError       - What every ProductStore operation returns      │
//! │      ├── Validation(ValidationError)                                   │
//! │      ├── NotFound(id)                                                  │
//! │      ├── Conflict(id)                                                  │
//! │      └── Persistence(message)                                          │
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - sqlx failures, converted into StoreError       │
//! │                                                                         │
//! │  Flow: sqlx::Error → DbError → StoreError → adapter text / HTTP status │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Quantity below zero.
    #[error("quantity must be non-negative, got {0}")]
    NegativeQuantity(i64),

    /// Price below zero or not a finite number.
    #[error("price must be a finite non-negative number, got {0}")]
    NegativePrice(f64),

    /// Text input that does not parse as the expected number.
    #[error("invalid {field}: '{value}' is not a valid number")]
    InvalidNumber { field: String, value: String },
}

impl ValidationError {
    /// Creates an InvalidNumber error.
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// True for the non-negativity failures (as opposed to parse failures).
    pub fn is_negative_value(&self) -> bool {
        matches!(
            self,
            ValidationError::NegativeQuantity(_) | ValidationError::NegativePrice(_)
        )
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by [`crate::store::ProductStore`] operations.
///
/// The store never retries. Every variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before any persistence work.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The addressed product does not exist.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A product with this id already exists.
    #[error("Product {0} already exists")]
    Conflict(ProductId),

    /// Underlying storage failure (connection loss, constraint, I/O).
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Creates a Persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        StoreError::Persistence(message.into())
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = StoreError::Conflict(1);
        assert_eq!(err.to_string(), "Product 1 already exists");

        let err = ValidationError::invalid_number("quantity", "ten");
        assert_eq!(err.to_string(), "invalid quantity: 'ten' is not a valid number");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let store_err: StoreError = ValidationError::NegativeQuantity(-1).into();
        assert!(matches!(
            store_err,
            StoreError::Validation(ValidationError::NegativeQuantity(-1))
        ));
    }

    #[test]
    fn test_is_negative_value() {
        assert!(ValidationError::NegativePrice(-0.5).is_negative_value());
        assert!(!ValidationError::invalid_number("id", "x").is_negative_value());
    }
}
