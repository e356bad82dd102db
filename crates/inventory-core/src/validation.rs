//! # Validation Module
//!
//! The product invariant and the text parsers used by form-style inputs.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Adapter                                                      │
//! │  ├── Desktop form: parse_id / parse_quantity / parse_price             │
//! │  ├── RPC: typed protobuf fields                                        │
//! │  └── HTTP: serde deserialization, then validate_stock_fields           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductStore (THIS MODULE's validate_stock_fields)           │
//! │  └── quantity >= 0 AND 0 <= price < inf                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── PRIMARY KEY on id                                                 │
//! │  └── CHECK constraints on quantity and price                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{is_valid, validate_stock_fields};
//!
//! assert!(is_valid(10, 2.5));
//! assert!(validate_stock_fields(-1, 2.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Invariant
// =============================================================================

/// The product invariant: `quantity >= 0 AND price >= 0`, with a finite price.
///
/// `NaN` and infinities are invalid; they have no JSON representation.
#[inline]
pub fn is_valid(quantity: i64, price: f64) -> bool {
    quantity >= 0 && price.is_finite() && price >= 0.0
}

/// Checks the product invariant, reporting which field failed.
///
/// Quantity is checked before price.
pub fn validate_stock_fields(quantity: i64, price: f64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }

    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses a product id from text.
pub fn parse_id(input: &str) -> ValidationResult<ProductId> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| ValidationError::invalid_number("id", input))
}

/// Parses a quantity from text. Sign is not checked here.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| ValidationError::invalid_number("quantity", input))
}

/// Parses a price from text. Sign is not checked here.
///
/// ## Rules
/// - Accepts plain decimal notation (`2.50`, `3`, `1e2`)
/// - Rejects `NaN` and infinities, which `f64::from_str` would otherwise accept
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let input = input.trim();
    match input.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::invalid_number("price", input)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid(0, 0.0));
        assert!(is_valid(10, 2.5));

        assert!(!is_valid(-1, 2.5));
        assert!(!is_valid(10, -0.01));
        assert!(!is_valid(10, f64::NAN));
        assert!(!is_valid(10, f64::INFINITY));
        assert!(!is_valid(10, f64::NEG_INFINITY));
    }

    #[test]
    fn test_validate_stock_fields_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_stock_fields(1, price),
                Err(ValidationError::NegativePrice(_))
            ));
        }
    }

    #[test]
    fn test_validate_stock_fields_reports_quantity_first() {
        assert_eq!(
            validate_stock_fields(-3, -1.0),
            Err(ValidationError::NegativeQuantity(-3))
        );
        assert!(matches!(
            validate_stock_fields(3, -1.0),
            Err(ValidationError::NegativePrice(_))
        ));
        assert!(validate_stock_fields(3, 1.0).is_ok());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 12 "), Ok(12));
        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("abc").is_err());
    }

    #[test]
    fn test_parse_quantity_allows_negative() {
        assert_eq!(parse_quantity("-4"), Ok(-4));
        assert!(parse_quantity("four").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.50"), Ok(2.5));
        assert_eq!(parse_price("3"), Ok(3.0));
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("").is_err());
    }
}
