//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐     ┌──────────┐   │
//! │  │  Empty   │────►│ In Cart  │────►│    Order     │────►│   CSV    │   │
//! │  │  Cart    │     │          │     │ confirmation │     │  export  │   │
//! │  └──────────┘     └──────────┘     └──────────────┘     └──────────┘   │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   edit_cart_line ──► derived fields recomputed          │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use hearth_core::validation::validate_product_code;
use hearth_core::{Cart, CartLine, CartTotals, LineEdit, Recomputed};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart lines plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Result of a single field edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLineResponse {
    pub cart: CartResponse,
    /// Derived fields the edit overwrote, so the form can flash them.
    pub recomputed: Recomputed,
    /// The edited line's last carton is only partly filled.
    pub packing_remainder: bool,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: item quantity increases and derivations re-run
/// - Not in cart: new line with volume, cartons and amount derived
/// - Off-shelf products are rejected
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_code: &str,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_code = %product_code, quantity = %quantity, "add_to_cart command");

    validate_product_code(product_code)?;
    let product = catalog
        .find(product_code)
        .ok_or_else(|| ApiError::not_found("Product", product_code))?;

    if !product.on_shelf {
        return Err(ApiError::validation(format!(
            "Product {} is not on shelf",
            product_code
        )));
    }

    cart.with_cart_mut(|c| {
        c.add_product(product, quantity)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}

/// Applies one field edit to a cart line.
pub fn edit_cart_line(
    cart: &CartState,
    line_id: &str,
    edit: LineEdit,
) -> Result<EditLineResponse, ApiError> {
    debug!(line_id = %line_id, ?edit, manual_override = edit.is_override(), "edit_cart_line command");

    cart.with_cart_mut(|c| {
        let recomputed = c.edit_line(line_id, edit)?;
        let packing_remainder = c
            .line(line_id)
            .map(|line| line.form.has_packing_remainder())
            .unwrap_or(false);

        Ok::<_, ApiError>(EditLineResponse {
            cart: CartResponse::from(&*c),
            recomputed,
            packing_remainder,
        })
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, line_id: &str) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_line(line_id)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::{TimeZone, Utc};
    use hearth_core::CatalogProduct;

    fn catalog() -> CatalogState {
        let product = |code: &str, spec: &str, packing, price, on_shelf| CatalogProduct {
            code: code.to_string(),
            name_zh: format!("产品 {}", code),
            name_en: format!("Product {}", code),
            category: None,
            unit_price: price,
            carton_specification: spec.to_string(),
            packing_quantity: packing,
            on_shelf,
            image_path: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        };

        CatalogState::new(vec![
            product("HG-001", "74*44*20cm", Some(6), Some(65.0), true),
            product("HG-002", "60*40*30", Some(10), Some(12.5), true),
            product("HG-OLD", "60*40*30", Some(10), Some(1.0), false),
        ])
    }

    #[test]
    fn test_order_confirmation_scenario() {
        let catalog = catalog();
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, "HG-001", Some(18)).unwrap();
        let line = &response.lines[0];
        assert_eq!(line.form.volume, Some(0.06512));
        assert_eq!(line.form.carton_quantity, Some(3));
        assert_eq!(line.form.untaxed_local_currency, Some(1170.0));
        let id = line.id.clone();

        // Partial last carton
        let edited = edit_cart_line(&cart, &id, LineEdit::ItemQuantity(20)).unwrap();
        assert_eq!(edited.cart.lines[0].form.carton_quantity, Some(4));
        assert_eq!(edited.cart.lines[0].form.untaxed_local_currency, Some(1300.0));
        assert!(edited.recomputed.carton_quantity);
        assert!(edited.packing_remainder);

        // Unparseable spec keeps the previous volume
        let edited =
            edit_cart_line(&cart, &id, LineEdit::CartonSpecification("74-44-20".into())).unwrap();
        assert!(!edited.recomputed.volume);
        assert_eq!(edited.cart.lines[0].form.volume, Some(0.06512));

        // Cleared price keeps the previous amount
        let edited = edit_cart_line(&cart, &id, LineEdit::UnitPrice(None)).unwrap();
        assert_eq!(edited.cart.lines[0].form.untaxed_local_currency, Some(1300.0));

        // New price derives again
        let edited = edit_cart_line(&cart, &id, LineEdit::UnitPrice(Some(48.75))).unwrap();
        assert_eq!(edited.cart.lines[0].form.untaxed_local_currency, Some(975.0));
    }

    #[test]
    fn test_add_to_cart_errors() {
        let catalog = catalog();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "HG-404", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_cart(&catalog, &cart, "HG-OLD", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&catalog, &cart, "bad code!", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&catalog, &cart, "HG-002", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(get_cart(&cart).lines.is_empty());
    }

    #[test]
    fn test_add_defaults_to_one_and_merges() {
        let catalog = catalog();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "HG-002", None).unwrap();
        let response = add_to_cart(&catalog, &cart, "HG-002", Some(10)).unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].form.item_quantity, 11);
        assert_eq!(response.totals.total_cartons, 2);
        assert_eq!(response.totals.remainder_warnings, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = catalog();
        let cart = CartState::new();

        let id = add_to_cart(&catalog, &cart, "HG-001", None).unwrap().lines[0]
            .id
            .clone();
        add_to_cart(&catalog, &cart, "HG-002", None).unwrap();

        let response = remove_from_cart(&cart, &id).unwrap();
        assert_eq!(response.totals.line_count, 1);

        let err = remove_from_cart(&cart, &id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let response = clear_cart(&cart);
        assert!(response.lines.is_empty());
        assert_eq!(response.totals.total_amount, 0.0);
    }
}
