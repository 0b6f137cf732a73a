//! # Order CSV Export
//!
//! Builds the CSV handed to the sales team for order confirmation. Only the
//! line-item fields the storefront derives are exported.
//!
//! ## Output Shape
//! ```text
//! Code,Name,Carton Spec,Packing Qty,Quantity,Cartons,Volume (m³),Unit Price,Amount\r\n
//! HG-001,Food Container,60*40*30,10,25,3,0.072,12.50,312.50\r\n
//! ```
//!
//! With the UTF-8 BOM enabled, spreadsheet apps open the Chinese header and
//! product names without garbling them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::rounding::{format_fixed, format_trimmed};
use crate::types::Locale;
use crate::VOLUME_DECIMALS;

const HEADER_EN: [&str; 9] = [
    "Code",
    "Name",
    "Carton Spec",
    "Packing Qty",
    "Quantity",
    "Cartons",
    "Volume (m³)",
    "Unit Price",
    "Amount",
];

const HEADER_ZH: [&str; 9] = [
    "产品编号",
    "产品名称",
    "外箱规格",
    "装箱数",
    "数量",
    "箱数",
    "体积(m³)",
    "单价",
    "金额",
];

const UTF8_BOM: &str = "\u{feff}";

/// Export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Header language and product name language.
    pub locale: Locale,
    /// Decimal places for prices and amounts.
    pub currency_decimals: u32,
    /// Prefix the output with a UTF-8 byte order mark.
    pub include_bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            locale: Locale::default(),
            currency_decimals: 2,
            include_bom: true,
        }
    }
}

/// Builds the order CSV for `lines`.
pub fn export_lines_csv(lines: &[CartLine], options: &ExportOptions) -> String {
    let mut out = String::new();
    if options.include_bom {
        out.push_str(UTF8_BOM);
    }

    let header = match options.locale {
        Locale::Zh => HEADER_ZH,
        Locale::En => HEADER_EN,
    };
    push_row(&mut out, header.iter().map(|h| Cow::Borrowed(*h)));

    for line in lines {
        let form = &line.form;
        let amount = |value: Option<f64>| {
            value
                .map(|v| format_fixed(v, options.currency_decimals))
                .unwrap_or_default()
        };

        let row: [Cow<'_, str>; 9] = [
            Cow::Borrowed(line.product_code.as_str()),
            Cow::Borrowed(line.display_name(options.locale)),
            Cow::Borrowed(form.carton_specification.as_str()),
            Cow::Owned(optional(form.packing_quantity)),
            Cow::Owned(form.item_quantity.to_string()),
            Cow::Owned(optional(form.carton_quantity)),
            Cow::Owned(
                form.volume
                    .map(|v| format_trimmed(v, VOLUME_DECIMALS))
                    .unwrap_or_default(),
            ),
            Cow::Owned(amount(form.unit_price)),
            Cow::Owned(amount(form.untaxed_local_currency)),
        ];
        push_row(&mut out, row.into_iter());
    }

    out
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = Cow<'a, str>>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

/// Quotes a field when it contains a comma, quote, CR or LF.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
