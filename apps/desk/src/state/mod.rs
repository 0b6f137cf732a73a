//! # State Module
//!
//! Each command takes only the state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │  CatalogState    │  │   CartState      │  │   DeskConfig     │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Vec<        │  │  Arc<Mutex<      │  │  store, currency │      │
//! │  │   CatalogProduct │  │    Cart          │  │  assets, catalog │      │
//! │  │  >>              │  │  >>              │  │  export          │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: read-only after load                                  │
//! │  • CartState: Arc<Mutex<T>> for exclusive access                       │
//! │  • DeskConfig: read-only after load                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::{
    AssetSettings, CatalogSettings, CurrencySettings, DeskConfig, ExportSettings, StoreSettings,
    CONFIG_FILE_NAME,
};
