//! # Commands Module
//!
//! Every operation the desk exposes. Commands are plain functions that take
//! the state they need by reference and return `Result<T, ApiError>` when
//! they can fail; the CLI in [`crate::cli`] is one caller.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── get_cart, add_to_cart, edit_cart_line,
//! │                    remove_from_cart, clear_cart
//! ├── catalog.rs  ◄─── search_catalog
//! ├── quote.rs    ◄─── derive_volume, derive_line, quote_lines
//! ├── export.rs   ◄─── export_cart_csv
//! └── config.rs   ◄─── get_config
//! ```
//!
//! ## State Injection
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//!
//! // Needs cart and config
//! fn export_cart_csv(cart: &CartState, config: &DeskConfig, ...)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod export;
pub mod quote;
