//! # Line-Item Form State
//!
//! The editable record behind every cart line, order-confirmation line and
//! SKU-detail "add to cart" form.
//!
//! ## Recompute Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Edited field            Overwrites                                    │
//! │  ─────────────────────   ───────────────────────────────────────────   │
//! │  carton specification ─► volume                (only if it parses)     │
//! │  packing quantity ─────► carton quantity       (only if reconcilable)  │
//! │  item quantity ────────► carton quantity, untaxed amount               │
//! │  unit price ───────────► untaxed amount        (only if derivable)     │
//! │                                                                         │
//! │  volume / carton quantity / untaxed amount ─► stored as typed,         │
//! │                                               nothing recomputed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A manual override of a derived field survives until one of its inputs
//! changes. Then it is overwritten without asking: fix a volume by hand,
//! touch the carton specification, and the volume is recomputed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dimension::parse_volume_from_spec;
use crate::packing::{has_packing_remainder, reconcile_carton_count};
use crate::pricing::derive_extended_amount;

/// Editable line-item fields, inputs and derived values side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemForm {
    /// Free text such as "74*44*20cm".
    #[serde(default)]
    pub carton_specification: String,

    /// Carton volume in m³. Derived, user-editable.
    #[serde(default)]
    pub volume: Option<f64>,

    /// Units per carton.
    #[serde(default)]
    pub packing_quantity: Option<u32>,

    /// Ordered units for the line.
    pub item_quantity: u32,

    /// Cartons shipped. Derived, user-editable.
    #[serde(default)]
    pub carton_quantity: Option<u32>,

    /// Unit price in local currency.
    #[serde(default)]
    pub unit_price: Option<f64>,

    /// Untaxed local-currency amount. Derived, user-editable.
    #[serde(default)]
    pub untaxed_local_currency: Option<f64>,
}

/// A single field edit coming from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LineEdit {
    CartonSpecification(String),
    Volume(f64),
    PackingQuantity(Option<u32>),
    ItemQuantity(u32),
    CartonQuantity(u32),
    UnitPrice(Option<f64>),
    UntaxedLocalCurrency(f64),
}

impl LineEdit {
    /// Whether this edit targets one of the derived fields directly.
    pub fn is_override(&self) -> bool {
        matches!(
            self,
            LineEdit::Volume(_) | LineEdit::CartonQuantity(_) | LineEdit::UntaxedLocalCurrency(_)
        )
    }
}

/// Which derived fields an edit overwrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recomputed {
    pub volume: bool,
    pub carton_quantity: bool,
    pub untaxed_local_currency: bool,
}

impl Recomputed {
    /// True if no derived field changed.
    pub fn is_empty(&self) -> bool {
        !(self.volume || self.carton_quantity || self.untaxed_local_currency)
    }
}

impl LineItemForm {
    /// Builds a form with every derivation already applied.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::line_item::LineItemForm;
    ///
    /// let form = LineItemForm::derive("60*40*30", Some(10), 25, Some(12.5));
    /// assert_eq!(form.volume, Some(0.072));
    /// assert_eq!(form.carton_quantity, Some(3));
    /// assert_eq!(form.untaxed_local_currency, Some(312.5));
    /// assert!(form.has_packing_remainder());
    /// ```
    pub fn derive(
        carton_specification: impl Into<String>,
        packing_quantity: Option<u32>,
        item_quantity: u32,
        unit_price: Option<f64>,
    ) -> Self {
        let carton_specification = carton_specification.into();
        LineItemForm {
            volume: parse_volume_from_spec(&carton_specification),
            carton_quantity: reconcile_carton_count(item_quantity, packing_quantity),
            untaxed_local_currency: derive_extended_amount(item_quantity, unit_price),
            carton_specification,
            packing_quantity,
            item_quantity,
            unit_price,
        }
    }

    /// Fills derived fields that are still empty, leaving present values
    /// alone. Used when a saved line is loaded back into a form.
    pub fn fill_missing(&mut self) {
        if self.volume.is_none() {
            self.volume = parse_volume_from_spec(&self.carton_specification);
        }
        if self.carton_quantity.is_none() {
            self.carton_quantity = reconcile_carton_count(self.item_quantity, self.packing_quantity);
        }
        if self.untaxed_local_currency.is_none() {
            self.untaxed_local_currency = derive_extended_amount(self.item_quantity, self.unit_price);
        }
    }

    /// Applies one field edit and re-runs the derivations it feeds.
    pub fn apply(&mut self, edit: LineEdit) -> Recomputed {
        let mut recomputed = Recomputed::default();

        match edit {
            LineEdit::CartonSpecification(spec) => {
                self.carton_specification = spec;
                recomputed.volume = self.recompute_volume();
            }
            LineEdit::PackingQuantity(packing) => {
                self.packing_quantity = packing;
                recomputed.carton_quantity = self.recompute_cartons();
            }
            LineEdit::ItemQuantity(quantity) => {
                self.item_quantity = quantity;
                recomputed.carton_quantity = self.recompute_cartons();
                recomputed.untaxed_local_currency = self.recompute_amount();
            }
            LineEdit::UnitPrice(price) => {
                self.unit_price = price;
                recomputed.untaxed_local_currency = self.recompute_amount();
            }
            LineEdit::Volume(volume) => self.volume = Some(volume),
            LineEdit::CartonQuantity(cartons) => self.carton_quantity = Some(cartons),
            LineEdit::UntaxedLocalCurrency(amount) => self.untaxed_local_currency = Some(amount),
        }

        recomputed
    }

    /// Non-blocking warning: the last carton is only partly filled.
    pub fn has_packing_remainder(&self) -> bool {
        has_packing_remainder(self.item_quantity, self.packing_quantity)
    }

    fn recompute_volume(&mut self) -> bool {
        match parse_volume_from_spec(&self.carton_specification) {
            Some(volume) => {
                self.volume = Some(volume);
                true
            }
            None => false,
        }
    }

    fn recompute_cartons(&mut self) -> bool {
        match reconcile_carton_count(self.item_quantity, self.packing_quantity) {
            Some(cartons) => {
                self.carton_quantity = Some(cartons);
                true
            }
            None => false,
        }
    }

    fn recompute_amount(&mut self) -> bool {
        match derive_extended_amount(self.item_quantity, self.unit_price) {
            Some(amount) => {
                self.untaxed_local_currency = Some(amount);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineItemForm {
        LineItemForm::derive("60*40*30", Some(10), 25, Some(12.5))
    }

    #[test]
    fn test_derive_end_to_end() {
        let form = sample();
        assert_eq!(form.volume, Some(0.072));
        assert_eq!(form.carton_quantity, Some(3));
        assert!(form.has_packing_remainder());
        assert_eq!(form.untaxed_local_currency, Some(312.5));
    }

    #[test]
    fn test_spec_edit_overwrites_manual_volume() {
        let mut form = sample();
        form.apply(LineEdit::Volume(0.08));
        assert_eq!(form.volume, Some(0.08));

        let recomputed = form.apply(LineEdit::CartonSpecification("60*40*30cm".into()));
        assert!(recomputed.volume);
        assert_eq!(form.volume, Some(0.072));
    }

    #[test]
    fn test_unparseable_spec_keeps_volume() {
        let mut form = sample();
        form.apply(LineEdit::Volume(0.08));

        let recomputed = form.apply(LineEdit::CartonSpecification("60-40-30".into()));
        assert!(!recomputed.volume);
        assert_eq!(form.carton_specification, "60-40-30");
        assert_eq!(form.volume, Some(0.08));
    }

    #[test]
    fn test_manual_cartons_survive_until_input_changes() {
        let mut form = sample();
        let recomputed = form.apply(LineEdit::CartonQuantity(2));
        assert!(recomputed.is_empty());
        assert_eq!(form.carton_quantity, Some(2));

        // Unrelated input leaves the override alone
        form.apply(LineEdit::UnitPrice(Some(13.0)));
        assert_eq!(form.carton_quantity, Some(2));

        form.apply(LineEdit::ItemQuantity(30));
        assert_eq!(form.carton_quantity, Some(3));
        assert!(!form.has_packing_remainder());
        assert_eq!(form.untaxed_local_currency, Some(390.0));
    }

    #[test]
    fn test_clearing_packing_keeps_cartons() {
        let mut form = sample();
        let recomputed = form.apply(LineEdit::PackingQuantity(None));
        assert!(!recomputed.carton_quantity);
        assert_eq!(form.carton_quantity, Some(3));
        assert!(!form.has_packing_remainder());

        form.apply(LineEdit::PackingQuantity(Some(0)));
        assert_eq!(form.carton_quantity, Some(3));

        form.apply(LineEdit::PackingQuantity(Some(5)));
        assert_eq!(form.carton_quantity, Some(5));
    }

    #[test]
    fn test_amount_override_and_recompute() {
        let mut form = sample();
        form.apply(LineEdit::UntaxedLocalCurrency(300.0));
        assert_eq!(form.untaxed_local_currency, Some(300.0));

        form.apply(LineEdit::UnitPrice(None));
        assert_eq!(form.untaxed_local_currency, Some(300.0));

        form.apply(LineEdit::UnitPrice(Some(10.0)));
        assert_eq!(form.untaxed_local_currency, Some(250.0));
    }

    #[test]
    fn test_fill_missing_keeps_saved_values() {
        let mut form = LineItemForm {
            carton_specification: "74*44*20".into(),
            volume: Some(0.07),
            packing_quantity: Some(6),
            item_quantity: 20,
            carton_quantity: None,
            unit_price: Some(2.0),
            untaxed_local_currency: None,
        };
        form.fill_missing();
        assert_eq!(form.volume, Some(0.07));
        assert_eq!(form.carton_quantity, Some(4));
        assert_eq!(form.untaxed_local_currency, Some(40.0));
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: LineEdit =
            serde_json::from_str(r#"{"field":"cartonSpecification","value":"74*44*20"}"#).unwrap();
        assert_eq!(edit, LineEdit::CartonSpecification("74*44*20".into()));

        let edit: LineEdit = serde_json::from_str(r#"{"field":"packingQuantity","value":null}"#).unwrap();
        assert_eq!(edit, LineEdit::PackingQuantity(None));
        assert!(!edit.is_override());
        assert!(LineEdit::Volume(0.1).is_override());
    }
}
