//! # Decimal Rounding and Rendering
//!
//! Helpers shared by the volume derivation, cart totals and CSV export.
//!
//! ## Why Not Integer Cents Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line amounts are derived as quantity × unit price with NO rounding.   │
//! │  The storefront keeps whatever the multiplication yields and rounds    │
//! │  only when it renders the number.                                      │
//! │                                                                         │
//! │  Volumes are the exception: they are rounded to 6 decimals as part of  │
//! │  the derivation itself (see `dimension`).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Rounds `value` to `decimals` places, halves away from zero.
///
/// For the non-negative values this crate handles that is round-half-up.
///
/// ## Example
/// ```rust
/// use hearth_core::rounding::round_to;
///
/// assert_eq!(round_to(0.0651204, 6), 0.06512);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Renders `value` with exactly `decimals` places.
///
/// Negative zero renders as zero.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    // Adding 0.0 folds -0.0 into 0.0
    let rounded = round_to(value, decimals) + 0.0;
    format!("{:.*}", decimals as usize, rounded)
}

/// Renders `value` with at most `max_decimals` places, dropping trailing
/// zeros (and the point itself for whole numbers).
///
/// ## Example
/// ```rust
/// use hearth_core::rounding::format_trimmed;
///
/// assert_eq!(format_trimmed(0.06512, 6), "0.06512");
/// assert_eq!(format_trimmed(3.0, 6), "3");
/// ```
pub fn format_trimmed(value: f64, max_decimals: u32) -> String {
    let fixed = format_fixed(value, max_decimals);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
