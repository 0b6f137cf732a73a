//! # Catalog State
//!
//! The product list the desk works from, loaded once from a JSON file.
//! Read-only after load, so it is shared through an `Arc` without locking.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use hearth_core::CatalogProduct;

use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Arc<Vec<CatalogProduct>>,
}

impl CatalogState {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        CatalogState {
            products: Arc::new(products),
        }
    }

    /// Parses a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let products: Vec<CatalogProduct> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Reads a JSON array of products from `path`.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let state = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(?path, products = state.products.len(), "Catalog loaded");
        Ok(state)
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Looks up a product by its code.
    pub fn find(&self, code: &str) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| p.code == code)
    }
}
