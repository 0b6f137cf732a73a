//! # Validation Module
//!
//! Turns raw form text into the typed values the derivations expect.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront widgets                                           │
//! │  ├── type="number", min="1"                                            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── "25" → 25u32, "" → Required / None, "-3" → error                  │
//! │  └── Limits: MAX_ITEM_QUANTITY, MAX_CART_LINES                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Derivations (dimension / packing / pricing)                  │
//! │  └── Assume inputs are already sane, never fail                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Carton specifications are deliberately NOT validated: a string that does
//! not parse is kept as free text and simply derives nothing.

use crate::error::ValidationError;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Inputs
// =============================================================================

/// Parses an item quantity typed into a form.
///
/// ## Rules
/// - Required
/// - Whole number, 1 to MAX_ITEM_QUANTITY
///
/// ## Example
/// ```rust
/// use hearth_core::validation::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input(" 25 ").unwrap(), 25);
/// assert!(parse_quantity_input("0").is_err());
/// assert!(parse_quantity_input("2.5").is_err());
/// ```
pub fn parse_quantity_input(text: &str) -> ValidationResult<u32> {
    parse_positive_count(text, "quantity")
}

/// Parses a packing quantity (units per carton). Blank means unknown.
pub fn parse_packing_input(text: &str) -> ValidationResult<Option<u32>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_positive_count(text, "packing quantity").map(Some)
}

/// Parses a unit price. Blank means unknown.
///
/// ## Rules
/// - Finite decimal number
/// - Zero allowed (samples, giveaways)
/// - Negative rejected
pub fn parse_price_input(text: &str) -> ValidationResult<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let price: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "unit price".to_string(),
        reason: "must be a number".to_string(),
    })?;

    validate_unit_price(price)?;
    Ok(Some(price))
}

/// Validates a unit price that already arrived as a number.
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "unit price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "unit price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an item quantity that already arrived as a number.
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a carton count typed over the derived value.
pub fn validate_carton_quantity(cartons: u32) -> ValidationResult<()> {
    if cartons == 0 {
        return Err(ValidationError::MustBePositive {
            field: "carton quantity".to_string(),
        });
    }

    Ok(())
}

fn parse_positive_count(text: &str, field: &str) -> ValidationResult<u32> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.starts_with('-') {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    let value: u64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value > MAX_ITEM_QUANTITY as u64 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(value as u32)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, hyphens, underscores and dots only
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.chars().count() > 50 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, underscores, and dots"
                .to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more line fits in the cart.
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
