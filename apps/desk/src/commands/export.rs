//! # Export Commands
//!
//! Order CSV for the sales team, built from the current cart.

use std::path::Path;

use tracing::{debug, info};

use hearth_core::{export_lines_csv, Locale};

use crate::error::ApiError;
use crate::state::{CartState, DeskConfig};

/// Builds the order CSV for the cart.
///
/// `locale` picks the header row and product name language; the store's
/// default locale is used when it is `None`.
pub fn export_cart_csv(
    cart: &CartState,
    config: &DeskConfig,
    locale: Option<Locale>,
) -> Result<String, ApiError> {
    let locale = locale.unwrap_or(config.store.default_locale);
    debug!(%locale, "export_cart_csv command");

    let options = config.export_options(locale);
    let csv = cart.with_cart(|c| {
        if c.is_empty() {
            return Err(ApiError::validation("Cart is empty, nothing to export"));
        }
        Ok(export_lines_csv(&c.lines, &options))
    })?;

    Ok(csv)
}

/// Writes an exported CSV to `path`.
pub fn write_export(csv: &str, path: &Path) -> Result<(), ApiError> {
    std::fs::write(path, csv)?;
    info!(?path, bytes = csv.len(), "Order CSV written");
    Ok(())
}
