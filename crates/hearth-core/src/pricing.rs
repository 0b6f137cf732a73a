//! # Price Derivation
//!
//! Extended (untaxed, local-currency) amount of a line item.
//!
//! The amount is NOT rounded here. `975.0` stays `975.0` and `0.1 × 3`
//! stays whatever the multiplication yields; rounding to currency decimals
//! belongs to whoever renders the number.

/// Derives `quantity × unit_price`.
///
/// Returns `None` when the unit price is unknown, negative, NaN or
/// infinite.
///
/// ## Example
/// ```rust
/// use hearth_core::pricing::derive_extended_amount;
///
/// assert_eq!(derive_extended_amount(15, Some(65.00)), Some(975.00));
/// assert_eq!(derive_extended_amount(15, None), None);
/// ```
pub fn derive_extended_amount(quantity: u32, unit_price: Option<f64>) -> Option<f64> {
    unit_price
        .filter(|price| price.is_finite() && *price >= 0.0)
        .map(|price| f64::from(quantity) * price)
}
