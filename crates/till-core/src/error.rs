//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Hard failures that abort a register call        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till-runtime errors (separate crate)                                  │
//! │  └── RuntimeError     - Config, logging and shared-state failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RuntimeError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hard vs. Soft Failures
//! Only `add_item` fails hard (`CoreError::InvalidArgument`). A rejected
//! discount surfaces as `ValidationError::InvalidDiscount` but leaves the
//! register untouched, so callers are free to ignore it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Register operation errors.
///
/// Returning one of these guarantees that the register was not mutated.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument to a register operation failed validation.
    ///
    /// ## When This Occurs
    /// - `add_item` with an empty name
    /// - `add_item` with a negative price
    /// - `add_item` with a quantity below 1
    /// - `add_item` whose line total would overflow the register total
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

impl CoreError {
    /// Name of the offending field, when the error carries one.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::InvalidArgument(err) => err.field(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value cannot be represented (NaN, infinite, overflowing).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Discount percentage outside 0..=100.
    #[error("Not valid discount")]
    InvalidDiscount { value: i64 },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. } => Some(field.as_str()),
            ValidationError::InvalidDiscount { .. } => Some("discount"),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item".to_string(),
        };
        assert_eq!(err.to_string(), "item is required");

        let err = ValidationError::InvalidDiscount { value: 101 };
        assert_eq!(err.to_string(), "Not valid discount");
    }

    #[test]
    fn test_invalid_argument_names_field() {
        let err: CoreError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert_eq!(err.field(), Some("quantity"));
        assert_eq!(err.to_string(), "Invalid argument: quantity must be positive");
    }
}
