//! # Validation Module
//!
//! Input validation for register operations.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Boundary                                │
//! │                                                                         │
//! │  Static typing already rules out a string price or a boolean           │
//! │  quantity. What remains are RANGE checks:                              │
//! │                                                                         │
//! │  add_item(name, price, quantity)                                       │
//! │  ├── validate_item_name  → name not blank                              │
//! │  ├── validate_price      → price >= 0                                  │
//! │  └── validate_quantity   → quantity >= 1                               │
//! │                                                                         │
//! │  set_discount(value)                                                   │
//! │  └── validate_discount_percent → 0 <= value <= 100                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("apple").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound of a discount percentage.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Coca-Cola 330ml").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use till_core::money::Money;
/// use till_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (>= 1)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// Failure is reported as `ValidationError::InvalidDiscount`, whose message is
/// the register's `Not valid discount` diagnostic.
pub fn validate_discount_percent(value: i64) -> ValidationResult<()> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&value) {
        return Err(ValidationError::InvalidDiscount { value });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("apple").is_ok());
        assert!(validate_item_name(" apple ").is_ok());

        let err = validate_item_name("").unwrap_err();
        assert_eq!(err.field(), Some("item"));
        assert!(validate_item_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1)).is_ok());

        let err = validate_price(Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(20).is_ok());
        assert!(validate_discount_percent(100).is_ok());

        assert_eq!(
            validate_discount_percent(-5),
            Err(ValidationError::InvalidDiscount { value: -5 })
        );
        assert!(validate_discount_percent(101).is_err());
    }
}
