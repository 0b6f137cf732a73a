//! # Carton Dimensions
//!
//! Parses the free-form carton specification typed on SKU, cart and
//! order-confirmation forms, and derives the carton volume in m³.
//!
//! ## Accepted Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <L> <sep> <W> <sep> <H> [cm]                                          │
//! │                                                                         │
//! │  L, W, H   decimal numbers in centimeters: 74, 10.5                    │
//! │  sep       one of  *  ×  x  X   (spaces allowed around it)             │
//! │  cm        optional unit suffix, any letter case                       │
//! │                                                                         │
//! │  "74*44*20"       ✅      "74-44-20"     ❌ unsupported separator      │
//! │  "74 × 44 × 20"   ✅      "74*44"        ❌ missing dimension          │
//! │  "10.5x10x10CM"   ✅      "74*44*abc"    ❌ non-numeric                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Strings saved by users years ago must keep parsing exactly like this.
//! Anything else means "no derivation": the caller keeps its current volume.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rounding::round_to;
use crate::{CM3_PER_M3, VOLUME_DECIMALS};

/// Carton specification grammar. ASCII digits only.
static CARTON_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*[*×x]\s*([0-9]+(?:\.[0-9]+)?)\s*[*×x]\s*([0-9]+(?:\.[0-9]+)?)\s*(?:cm)?$",
    )
    .expect("carton specification pattern is valid")
});

/// Outer carton dimensions, all in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartonDimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl CartonDimensions {
    /// Parses a carton specification such as `"74*44*20cm"`.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything the
    /// grammar does not accept.
    pub fn parse(spec: &str) -> Option<Self> {
        let caps = CARTON_SPEC.captures(spec.trim())?;
        Some(CartonDimensions {
            length_cm: caps.get(1)?.as_str().parse().ok()?,
            width_cm: caps.get(2)?.as_str().parse().ok()?,
            height_cm: caps.get(3)?.as_str().parse().ok()?,
        })
    }

    /// Volume in cubic centimeters.
    #[inline]
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// Volume in cubic meters, rounded to 6 decimal places.
    pub fn volume_m3(&self) -> f64 {
        round_to(self.volume_cm3() / CM3_PER_M3, VOLUME_DECIMALS)
    }
}

/// Derives the carton volume (m³) from a carton specification.
///
/// ## Example
/// ```rust
/// use hearth_core::dimension::parse_volume_from_spec;
///
/// assert_eq!(parse_volume_from_spec("74*44*20"), Some(0.06512));
/// assert_eq!(parse_volume_from_spec("10.5x10x10cm"), Some(0.00105));
/// assert_eq!(parse_volume_from_spec("74-44-20"), None);
/// ```
pub fn parse_volume_from_spec(spec: &str) -> Option<f64> {
    CartonDimensions::parse(spec).map(|dims| dims.volume_m3())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(parse_volume_from_spec("74*44*20"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74×44×20"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74x44x20"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74X44X20"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74*44x20"), Some(0.06512));
    }

    #[test]
    fn test_unit_suffix_and_whitespace() {
        assert_eq!(parse_volume_from_spec("74*44*20cm"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74*44*20CM"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("74 * 44 * 20 cm"), Some(0.06512));
        assert_eq!(parse_volume_from_spec("  74*44*20cm  "), Some(0.06512));
        assert_eq!(parse_volume_from_spec("10.5x10x10cm"), Some(0.00105));
    }

    #[test]
    fn test_rounds_to_six_decimals() {
        // 1.5 * 1.5 * 1.5 = 3.375 cm³ = 0.000003375 m³
        assert_eq!(parse_volume_from_spec("1.5*1.5*1.5"), Some(0.000003));
        // 60 * 40 * 30 = 72000 cm³
        assert_eq!(parse_volume_from_spec("60*40*30"), Some(0.072));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert_eq!(parse_volume_from_spec(""), None);
        assert_eq!(parse_volume_from_spec("   "), None);
        assert_eq!(parse_volume_from_spec("74-44-20"), None);
        assert_eq!(parse_volume_from_spec("74*44"), None);
        assert_eq!(parse_volume_from_spec("74*44*20*10"), None);
        assert_eq!(parse_volume_from_spec("74*44*abc"), None);
        assert_eq!(parse_volume_from_spec("74*44*20mm"), None);
        assert_eq!(parse_volume_from_spec(".5*44*20"), None);
        assert_eq!(parse_volume_from_spec("74.*44*20"), None);
        assert_eq!(parse_volume_from_spec("-74*44*20"), None);
        assert_eq!(parse_volume_from_spec("７４*44*20"), None);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let first = parse_volume_from_spec("53.5*31*28cm");
        let second = parse_volume_from_spec("53.5*31*28cm");
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_dimensions() {
        let dims = CartonDimensions::parse("74*44*20cm").unwrap();
        assert_eq!(dims.length_cm, 74.0);
        assert_eq!(dims.width_cm, 44.0);
        assert_eq!(dims.height_cm, 20.0);
        assert_eq!(dims.volume_cm3(), 65120.0);
    }
}
