//! # Domain Types
//!
//! Catalog-facing types shared by the cart, catalog browsing and export.
//!
//! ## Bilingual Names
//! Every product carries a Chinese and an English name. Screens pick one by
//! [`Locale`] and fall back to the other when the preferred one is blank,
//! so half-translated catalog entries still show something.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Locale
// =============================================================================

/// Storefront display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese (default storefront language).
    #[default]
    Zh,
    /// English.
    En,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Locale::Zh),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(crate::ValidationError::InvalidFormat {
                field: "locale".to_string(),
                reason: format!("unknown locale '{}', expected zh or en", other),
            }),
        }
    }
}

/// Picks the name for `locale`, falling back to the other language.
pub fn localized_name<'a>(name_zh: &'a str, name_en: &'a str, locale: Locale) -> &'a str {
    let (preferred, fallback) = match locale {
        Locale::Zh => (name_zh, name_en),
        Locale::En => (name_en, name_zh),
    };
    if preferred.trim().is_empty() {
        fallback
    } else {
        preferred
    }
}

// =============================================================================
// Catalog Product
// =============================================================================

/// A SKU as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Product code identifying the SKU.
    pub code: String,

    #[serde(default)]
    pub name_zh: String,

    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub category: Option<String>,

    /// Unit price in local currency; hidden for some wholesale SKUs.
    #[serde(default)]
    pub unit_price: Option<f64>,

    /// Outer carton dimensions, e.g. "74*44*20cm".
    #[serde(default)]
    pub carton_specification: String,

    /// Units per carton.
    #[serde(default)]
    pub packing_quantity: Option<u32>,

    /// Whether the product is listed in the storefront.
    #[serde(default = "default_on_shelf")]
    pub on_shelf: bool,

    /// Relative image path under the configured image base URL.
    #[serde(default)]
    pub image_path: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

fn default_on_shelf() -> bool {
    true
}

impl CatalogProduct {
    /// Display name for `locale`.
    pub fn display_name(&self, locale: Locale) -> &str {
        localized_name(&self.name_zh, &self.name_en, locale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_name_fallback() {
        assert_eq!(localized_name("保鲜盒", "Food Container", Locale::Zh), "保鲜盒");
        assert_eq!(localized_name("保鲜盒", "Food Container", Locale::En), "Food Container");
        assert_eq!(localized_name("保鲜盒", "  ", Locale::En), "保鲜盒");
        assert_eq!(localized_name("", "Food Container", Locale::Zh), "Food Container");
    }

    #[test]
    fn test_locale_parse_and_display() {
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::default(), Locale::Zh);
    }

    #[test]
    fn test_catalog_product_defaults() {
        let product: CatalogProduct = serde_json::from_str(
            r#"{"code":"HG-1001","nameZh":"收纳箱","createdAt":"2024-03-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(product.on_shelf);
        assert_eq!(product.unit_price, None);
        assert_eq!(product.display_name(Locale::En), "收纳箱");
    }
}
