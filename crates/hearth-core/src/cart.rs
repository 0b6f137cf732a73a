//! # Cart
//!
//! The salesperson's working cart: one [`LineItemForm`] per SKU plus a
//! frozen snapshot of the catalog data shown next to it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront action          Cart change                                 │
//! │  ─────────────────          ───────────                                 │
//! │                                                                         │
//! │  Add SKU ─────────────────► new line, all derivations run              │
//! │  Add same SKU again ──────► ItemQuantity edit on the existing line     │
//! │  Restore saved line ──────► LineItemForm::fill_missing, no merging     │
//! │  Edit a field ────────────► LineItemForm::apply(edit)                  │
//! │  Remove / Clear ──────────► lines.retain / lines.clear                 │
//! │  View ────────────────────► CartTotals::from(&cart)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::line_item::{LineEdit, LineItemForm, Recomputed};
use crate::rounding::round_to;
use crate::types::{localized_name, CatalogProduct, Locale};
use crate::validation::{
    validate_cart_size, validate_carton_quantity, validate_quantity, validate_unit_price,
};
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY, VOLUME_DECIMALS};

/// A line in the cart.
///
/// Catalog fields are copied when the line is created so the cart keeps
/// showing what the salesperson saw, even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line ID (UUID v4)
    pub id: String,

    /// Product code at time of adding (frozen)
    pub product_code: String,

    #[serde(default)]
    pub name_zh: String,

    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub image_path: Option<String>,

    /// Editable quantities, prices and their derivations
    pub form: LineItemForm,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line for `product` with all derivations applied.
    pub fn from_product(product: &CatalogProduct, quantity: u32) -> Self {
        let form = LineItemForm::derive(
            product.carton_specification.clone(),
            product.packing_quantity,
            quantity,
            product.unit_price,
        );
        CartLine::with_form(product, form)
    }

    /// Creates a line for `product` carrying an already filled-in form.
    pub fn with_form(product: &CatalogProduct, form: LineItemForm) -> Self {
        CartLine {
            id: Uuid::new_v4().to_string(),
            product_code: product.code.clone(),
            name_zh: product.name_zh.clone(),
            name_en: product.name_en.clone(),
            image_path: product.image_path.clone(),
            form,
            added_at: Utc::now(),
        }
    }

    /// Display name for `locale`.
    pub fn display_name(&self, locale: Locale) -> &str {
        localized_name(&self.name_zh, &self.name_en, locale)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - One line per product code (adding it again increases quantity)
/// - At most MAX_CART_LINES lines
/// - Item quantity of every line in 1..=MAX_ITEM_QUANTITY
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product or increases the quantity of its existing line.
    ///
    /// Increasing goes through [`LineEdit::ItemQuantity`], so the carton
    /// count and amount of that line are recomputed.
    pub fn add_product(&mut self, product: &CatalogProduct, quantity: u32) -> CoreResult<&CartLine> {
        validate_quantity(quantity)?;

        if let Some(index) = self.lines.iter().position(|l| l.product_code == product.code) {
            let line = &mut self.lines[index];
            let merged = u64::from(line.form.item_quantity) + u64::from(quantity);
            if merged > u64::from(MAX_ITEM_QUANTITY) {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.form.apply(LineEdit::ItemQuantity(merged as u32));
            return Ok(&self.lines[index]);
        }

        validate_cart_size(self.lines.len()).map_err(|_| CoreError::CartTooLarge {
            max: MAX_CART_LINES,
        })?;

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Brings back a saved line as it was stored.
    ///
    /// Values present in `form` are kept, missing derived values are filled
    /// in. Saved lines are never merged: a product code already in the cart
    /// is rejected.
    pub fn restore_line(
        &mut self,
        product: &CatalogProduct,
        mut form: LineItemForm,
    ) -> CoreResult<&CartLine> {
        validate_quantity(form.item_quantity)?;
        if let Some(cartons) = form.carton_quantity {
            validate_carton_quantity(cartons)?;
        }
        if let Some(price) = form.unit_price {
            validate_unit_price(price)?;
        }

        if self.lines.iter().any(|l| l.product_code == product.code) {
            return Err(CoreError::DuplicateLine(product.code.clone()));
        }

        validate_cart_size(self.lines.len()).map_err(|_| CoreError::CartTooLarge {
            max: MAX_CART_LINES,
        })?;

        form.fill_missing();
        self.lines.push(CartLine::with_form(product, form));
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Applies a field edit to one line.
    ///
    /// Quantities, carton counts and prices are checked the same way the
    /// form-text parsers check them.
    pub fn edit_line(&mut self, line_id: &str, edit: LineEdit) -> CoreResult<Recomputed> {
        match &edit {
            LineEdit::ItemQuantity(quantity) => validate_quantity(*quantity)?,
            LineEdit::CartonQuantity(cartons) => validate_carton_quantity(*cartons)?,
            LineEdit::UnitPrice(Some(price)) => validate_unit_price(*price)?,
            _ => {}
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| CoreError::LineNotFound(line_id.to_string()))?;

        Ok(line.form.apply(edit))
    }

    /// Looks up a line by ID.
    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    /// Removes a line by ID.
    pub fn remove_line(&mut self, line_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != line_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound(line_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart summary for the order-confirmation footer.
///
/// Lines whose derived value is unknown contribute nothing to that sum.
/// Volume is shipping volume: carton volume times carton count, so a line
/// missing either one adds no volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    #[ts(type = "number")]
    pub total_quantity: u64,
    #[ts(type = "number")]
    pub total_cartons: u64,
    /// Shipping volume in m³, rounded to 6 decimals
    pub total_volume: f64,
    pub total_amount: f64,
    /// Lines whose last carton is only partly filled
    pub remainder_warnings: usize,
}

impl CartTotals {
    /// Sums a set of line forms.
    pub fn from_forms<'a>(forms: impl IntoIterator<Item = &'a LineItemForm>) -> Self {
        let mut totals = CartTotals {
            line_count: 0,
            total_quantity: 0,
            total_cartons: 0,
            total_volume: 0.0,
            total_amount: 0.0,
            remainder_warnings: 0,
        };

        for form in forms {
            totals.line_count += 1;
            totals.total_quantity += u64::from(form.item_quantity);
            totals.total_cartons += u64::from(form.carton_quantity.unwrap_or(0));
            if let (Some(volume), Some(cartons)) = (form.volume, form.carton_quantity) {
                totals.total_volume += volume * f64::from(cartons);
            }
            totals.total_amount += form.untaxed_local_currency.unwrap_or(0.0);
            if form.has_packing_remainder() {
                totals.remainder_warnings += 1;
            }
        }

        totals.total_volume = round_to(totals.total_volume, VOLUME_DECIMALS);
        totals
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals::from_forms(cart.lines.iter().map(|l| &l.form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_product(code: &str, spec: &str, packing: Option<u32>, price: Option<f64>) -> CatalogProduct {
        CatalogProduct {
            code: code.to_string(),
            name_zh: format!("产品 {}", code),
            name_en: format!("Product {}", code),
            category: Some("storage".to_string()),
            unit_price: price,
            carton_specification: spec.to_string(),
            packing_quantity: packing,
            on_shelf: true,
            image_path: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_add_product_derives_line() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "60*40*30", Some(10), Some(12.5));

        let line = cart.add_product(&product, 25).unwrap();
        assert_eq!(line.form.volume, Some(0.072));
        assert_eq!(line.form.carton_quantity, Some(3));
        assert_eq!(line.form.untaxed_local_currency, Some(312.5));
        assert!(line.form.has_packing_remainder());
    }

    #[test]
    fn test_add_same_product_merges_and_recomputes() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "60*40*30", Some(10), Some(12.5));

        cart.add_product(&product, 25).unwrap();
        let line = cart.add_product(&product, 5).unwrap();

        assert_eq!(line.form.item_quantity, 30);
        assert_eq!(line.form.carton_quantity, Some(3));
        assert_eq!(line.form.untaxed_local_currency, Some(375.0));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_rejects_quantity_overflow() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "", None, None);

        cart.add_product(&product, MAX_ITEM_QUANTITY).unwrap();
        let err = cart.add_product(&product, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert!(matches!(
            cart.add_product(&product, 0).unwrap_err(),
            CoreError::Validation(_)
        ));
    }

    #[test]
    fn test_cart_line_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_product(&test_product(&format!("C-{}", i), "", None, None), 1)
                .unwrap();
        }
        let err = cart
            .add_product(&test_product("ONE-MORE", "", None, None), 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
    }

    #[test]
    fn test_edit_and_remove_line() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "74*44*20", Some(6), Some(2.0));
        let id = cart.add_product(&product, 18).unwrap().id.clone();

        let recomputed = cart.edit_line(&id, LineEdit::ItemQuantity(20)).unwrap();
        assert!(recomputed.carton_quantity);
        assert_eq!(cart.line(&id).unwrap().form.carton_quantity, Some(4));

        assert!(cart.edit_line(&id, LineEdit::ItemQuantity(0)).is_err());
        assert!(matches!(
            cart.edit_line("missing", LineEdit::Volume(1.0)),
            Err(CoreError::LineNotFound(_))
        ));

        cart.remove_line(&id).unwrap();
        assert!(cart.is_empty());
        assert!(cart.remove_line(&id).is_err());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", "60*40*30", Some(10), Some(12.5)), 25)
            .unwrap();
        cart.add_product(&test_product("B", "74*44*20", Some(6), Some(65.0)), 18)
            .unwrap();
        cart.add_product(&test_product("C", "unknown", None, None), 4)
            .unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 3);
        assert_eq!(totals.total_quantity, 47);
        assert_eq!(totals.total_cartons, 6);
        // 3 × 0.072 + 3 × 0.06512
        assert_eq!(totals.total_volume, 0.41136);
        assert_eq!(totals.total_amount, 312.5 + 1170.0);
        assert_eq!(totals.remainder_warnings, 1);
    }

    #[test]
    fn test_total_volume_counts_every_carton() {
        let mut cart = Cart::new();
        let id = cart
            .add_product(&test_product("A", "60*40*30", Some(10), Some(12.5)), 25)
            .unwrap()
            .id
            .clone();
        assert_eq!(CartTotals::from(&cart).total_volume, 0.216);

        // Volume known, carton count unknown
        cart.add_product(&test_product("B", "50*50*40", None, None), 7)
            .unwrap();
        assert_eq!(CartTotals::from(&cart).total_volume, 0.216);

        // A typed carton count feeds the total
        cart.edit_line(&id, LineEdit::CartonQuantity(4)).unwrap();
        assert_eq!(CartTotals::from(&cart).total_volume, 0.288);
    }

    #[test]
    fn test_edit_rejects_bad_numbers() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "60*40*30", Some(10), Some(12.5));
        let id = cart.add_product(&product, 25).unwrap().id.clone();

        assert!(matches!(
            cart.edit_line(&id, LineEdit::UnitPrice(Some(-1.0))),
            Err(CoreError::Validation(_))
        ));
        assert!(cart.edit_line(&id, LineEdit::UnitPrice(Some(f64::NAN))).is_err());
        assert!(matches!(
            cart.edit_line(&id, LineEdit::CartonQuantity(0)),
            Err(CoreError::Validation(_))
        ));

        let form = &cart.line(&id).unwrap().form;
        assert_eq!(form.unit_price, Some(12.5));
        assert_eq!(form.carton_quantity, Some(3));

        // Clearing the price is still allowed
        cart.edit_line(&id, LineEdit::UnitPrice(None)).unwrap();
        assert_eq!(cart.line(&id).unwrap().form.unit_price, None);
    }

    #[test]
    fn test_restore_line_keeps_saved_values() {
        let mut cart = Cart::new();
        let product = test_product("HG-1", "74*44*20", Some(6), Some(2.0));
        let saved = LineItemForm {
            carton_specification: "74*44*20".to_string(),
            volume: Some(0.07),
            packing_quantity: Some(6),
            item_quantity: 20,
            carton_quantity: None,
            unit_price: Some(2.0),
            untaxed_local_currency: None,
        };

        let line = cart.restore_line(&product, saved.clone()).unwrap();
        assert_eq!(line.form.volume, Some(0.07));
        assert_eq!(line.form.carton_quantity, Some(4));
        assert_eq!(line.form.untaxed_local_currency, Some(40.0));

        assert!(matches!(
            cart.restore_line(&product, saved.clone()),
            Err(CoreError::DuplicateLine(_))
        ));
        assert_eq!(cart.line_count(), 1);

        let zero_cartons = LineItemForm {
            carton_quantity: Some(0),
            ..saved
        };
        let other = test_product("HG-2", "", None, None);
        assert!(cart.restore_line(&other, zero_cartons).is_err());
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", "", None, None), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(CartTotals::from(&cart).total_volume, 0.0);
    }
}
