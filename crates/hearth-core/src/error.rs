//! # Error Types
//!
//! Domain-specific error types for hearth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hearth-core errors (this file)                                        │
//! │  ├── CoreError        - Cart / line-item rule violations               │
//! │  └── ValidationError  - Form input that fails to parse                 │
//! │                                                                         │
//! │  hearth-desk errors (app)                                              │
//! │  ├── ConfigError      - Config file / env problems                     │
//! │  └── ApiError         - What the storefront sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The carton, packing and pricing derivations never produce errors. They
//! answer `None` when there is nothing to derive.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and line-item rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No cart line carries the given id.
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    /// A saved line names a product that already has a line.
    #[error("Product {0} already has a line in the cart")]
    DuplicateLine(String),

    /// Cart has reached its maximum number of lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds the maximum allowed on a single line.
    ///
    /// ## When This Occurs
    /// Adding an already-present SKU again pushes the merged quantity past
    /// the limit, e.g. 999,000 + 1,000.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These stand in for the `type="number"` / `min` guards of the storefront
/// input widgets: the derivations assume they already passed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. "12a" for a quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
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
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1_000_500,
            max: 999_999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1000500 exceeds maximum allowed (999999)"
        );

        let err = CoreError::LineNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Cart line not found: abc");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity is required");

        let err = ValidationError::MustBePositive {
            field: "packing quantity".to_string(),
        };
        assert_eq!(err.to_string(), "packing quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
