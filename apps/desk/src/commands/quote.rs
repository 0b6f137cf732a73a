//! # Quote Commands
//!
//! Derivations run on lines that do not come from the loaded catalog: a
//! single carton specification typed on the SKU form, or a list of line
//! inputs read from a JSON file for the `quote` and `export` subcommands.
//!
//! ## Quote Input
//! ```json
//! [
//!   {
//!     "productCode": "HG-001",
//!     "nameZh": "收纳箱",
//!     "cartonSpecification": "74*44*20cm",
//!     "packingQuantity": 6,
//!     "itemQuantity": 18,
//!     "unitPrice": 65
//!   }
//! ]
//! ```
//!
//! `volume`, `cartonQuantity` and `untaxedLocalCurrency` are saved values:
//! when present they are kept, when absent they are derived. Each product
//! code may appear once per quote file.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hearth_core::validation::{
    parse_packing_input, parse_price_input, parse_quantity_input, validate_product_code,
};
use hearth_core::{CartonDimensions, CatalogProduct, LineItemForm};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::CartState;

/// Result of deriving a volume from a carton specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResponse {
    pub carton_specification: String,
    /// `None` when the specification does not parse
    pub dimensions: Option<CartonDimensions>,
    /// m³, rounded to 6 decimals
    pub volume: Option<f64>,
}

/// Derives the carton volume for the SKU form.
///
/// An unparseable specification is not an error: the form keeps whatever
/// volume it had.
pub fn derive_volume(carton_specification: &str) -> VolumeResponse {
    debug!(spec = %carton_specification, "derive_volume command");

    let dimensions = CartonDimensions::parse(carton_specification);
    VolumeResponse {
        carton_specification: carton_specification.to_string(),
        volume: dimensions.map(|d| d.volume_m3()),
        dimensions,
    }
}

/// Raw text from the SKU form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineFormText {
    pub carton_specification: String,
    pub packing_quantity: String,
    pub item_quantity: String,
    pub unit_price: String,
}

/// Validates SKU form text and derives volume, cartons and amount.
pub fn derive_line(text: &LineFormText) -> Result<LineItemForm, ApiError> {
    debug!(?text, "derive_line command");

    let packing_quantity = parse_packing_input(&text.packing_quantity)?;
    let item_quantity = parse_quantity_input(&text.item_quantity)?;
    let unit_price = parse_price_input(&text.unit_price)?;

    Ok(LineItemForm::derive(
        text.carton_specification.trim(),
        packing_quantity,
        item_quantity,
        unit_price,
    ))
}

/// One line of a quote file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_code: String,
    #[serde(default)]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub carton_specification: String,
    #[serde(default)]
    pub packing_quantity: Option<u32>,
    pub item_quantity: u32,
    #[serde(default)]
    pub unit_price: Option<f64>,

    // Saved derived values
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub carton_quantity: Option<u32>,
    #[serde(default)]
    pub untaxed_local_currency: Option<f64>,
}

impl QuoteLine {
    fn as_product(&self) -> CatalogProduct {
        CatalogProduct {
            code: self.product_code.clone(),
            name_zh: self.name_zh.clone(),
            name_en: self.name_en.clone(),
            category: None,
            unit_price: self.unit_price,
            carton_specification: self.carton_specification.clone(),
            packing_quantity: self.packing_quantity,
            on_shelf: true,
            image_path: self.image_path.clone(),
            created_at: Utc::now(),
        }
    }

    fn saved_form(&self) -> LineItemForm {
        LineItemForm {
            carton_specification: self.carton_specification.clone(),
            volume: self.volume,
            packing_quantity: self.packing_quantity,
            item_quantity: self.item_quantity,
            carton_quantity: self.carton_quantity,
            unit_price: self.unit_price,
            untaxed_local_currency: self.untaxed_local_currency,
        }
    }
}

/// Parses a JSON array of [`QuoteLine`]s.
pub fn parse_quote_lines(json: &str) -> Result<Vec<QuoteLine>, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Adds quote lines to `cart`, keeping the derived values each line carries
/// and deriving the ones it leaves out.
///
/// All or nothing: if any line is rejected (bad code, bad quantity, a code
/// already in the cart or repeated in the file), the cart is left as it was.
pub fn quote_lines(cart: &CartState, lines: &[QuoteLine]) -> Result<CartResponse, ApiError> {
    debug!(lines = lines.len(), "quote_lines command");

    cart.with_cart_mut(|c| {
        let mut draft = c.clone();
        for input in lines {
            validate_product_code(&input.product_code)?;
            draft.restore_line(&input.as_product(), input.saved_form())?;
        }
        *c = draft;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}
