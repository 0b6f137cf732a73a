//! # hearth-core: Pure Business Logic for the Hearth Storefront
//!
//! Carton, packing and pricing derivations shared by the cart,
//! order-confirmation, SKU detail and salesperson screens, plus the catalog
//! and export helpers built on top of them. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hearth Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Storefront / Admin (zh / en)                       │   │
//! │  │   SKU detail ──► Cart ──► Order confirmation ──► CSV export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                hearth-desk (state, config, commands)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hearth-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ dimension │  │  packing  │  │  pricing  │  │ line_item │  │   │
//! │  │   │  volume   │  │  cartons  │  │  amount   │  │  policy   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  catalog  │  │  export   │  │validation │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dimension`] - Carton specification parsing and volume (m³)
//! - [`packing`] - Carton count and partial-carton warning
//! - [`pricing`] - Untaxed line amount
//! - [`line_item`] - Line form state and its recompute policy
//! - [`cart`] - Cart lines and totals
//! - [`catalog`] - Filter / sort / paginate products
//! - [`export`] - Order CSV
//! - [`validation`] - Form text to typed values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hearth_core::{derive_extended_amount, parse_volume_from_spec, reconcile_carton_count};
//!
//! assert_eq!(parse_volume_from_spec("74*44*20cm"), Some(0.06512));
//! assert_eq!(reconcile_carton_count(20, Some(6)), Some(4));
//! assert_eq!(derive_extended_amount(15, Some(65.0)), Some(975.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod dimension;
pub mod error;
pub mod export;
pub mod line_item;
pub mod packing;
pub mod pricing;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{browse, CatalogQuery, Page, SortOrder};
pub use dimension::{parse_volume_from_spec, CartonDimensions};
pub use error::{CoreError, CoreResult, ValidationError};
pub use export::{export_lines_csv, ExportOptions};
pub use line_item::{LineEdit, LineItemForm, Recomputed};
pub use packing::{has_packing_remainder, reconcile_carton_count};
pub use pricing::derive_extended_amount;
pub use types::{CatalogProduct, Locale};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines in a single cart.
pub const MAX_CART_LINES: usize = 200;

/// Maximum item quantity on a single line.
///
/// Wholesale orders run to tens of thousands of units; this only catches
/// a stray extra digit.
pub const MAX_ITEM_QUANTITY: u32 = 999_999;

/// Decimal places kept on derived volumes.
pub const VOLUME_DECIMALS: u32 = 6;

/// Cubic centimeters per cubic meter.
pub const CM3_PER_M3: f64 = 1_000_000.0;
