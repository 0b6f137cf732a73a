//! # Catalog Commands
//!
//! Product listing for the storefront and salesperson screens. Each product
//! comes back with its display name, formatted price, resolved image URL
//! and the carton volume derived from its specification.

use serde::{Deserialize, Serialize};
use tracing::debug;

use hearth_core::{browse, parse_volume_from_spec, CatalogProduct, CatalogQuery, Locale, Page, SortOrder};

use crate::state::{CatalogState, DeskConfig};

/// Product as shown in listings and on the SKU detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub code: String,
    /// Name in the requested locale
    pub name: String,
    pub name_zh: String,
    pub name_en: String,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    /// `unit_price` with currency symbol
    pub price_label: Option<String>,
    pub carton_specification: String,
    /// m³, derived from `carton_specification`
    pub volume: Option<f64>,
    pub packing_quantity: Option<u32>,
    pub on_shelf: bool,
    pub image_url: Option<String>,
}

impl ProductDto {
    pub fn from_product(product: &CatalogProduct, locale: Locale, config: &DeskConfig) -> Self {
        ProductDto {
            code: product.code.clone(),
            name: product.display_name(locale).to_string(),
            name_zh: product.name_zh.clone(),
            name_en: product.name_en.clone(),
            category: product.category.clone(),
            unit_price: product.unit_price,
            price_label: product.unit_price.map(|p| config.format_currency(p)),
            carton_specification: product.carton_specification.clone(),
            volume: parse_volume_from_spec(&product.carton_specification),
            packing_quantity: product.packing_quantity,
            on_shelf: product.on_shelf,
            image_url: product
                .image_path
                .as_deref()
                .and_then(|path| config.image_url(path)),
        }
    }
}

/// Search parameters. Unset values fall back to the desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub include_off_shelf: bool,
    pub sort: SortOrder,
    pub locale: Option<Locale>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Filters, sorts and pages the catalog.
pub fn search_catalog(
    catalog: &CatalogState,
    config: &DeskConfig,
    params: SearchParams,
) -> Page<ProductDto> {
    debug!(?params, "search_catalog command");

    let locale = params.locale.unwrap_or(config.store.default_locale);
    let query = CatalogQuery {
        keyword: params.keyword,
        category: params.category,
        include_off_shelf: params.include_off_shelf,
        sort: params.sort,
        locale,
        page: params.page.unwrap_or(1),
        page_size: params.page_size.unwrap_or(config.catalog.page_size),
    };

    let page = browse(catalog.products(), &query);
    debug!(total = page.total, page = page.page, "Catalog search complete");

    Page {
        items: page
            .items
            .iter()
            .map(|p| ProductDto::from_product(p, locale, config))
            .collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogState {
        CatalogState::from_json(
            r#"[
                {
                    "code": "HG-001",
                    "nameZh": "保鲜盒",
                    "nameEn": "Food Container",
                    "category": "kitchen",
                    "unitPrice": 12.5,
                    "cartonSpecification": "60*40*30",
                    "packingQuantity": 10,
                    "imagePath": "products/hg-001.jpg",
                    "createdAt": "2024-05-01T00:00:00Z"
                },
                {
                    "code": "HG-002",
                    "nameZh": "收纳箱",
                    "nameEn": "",
                    "category": "storage",
                    "cartonSpecification": "74*44*20cm",
                    "createdAt": "2024-05-02T00:00:00Z"
                },
                {
                    "code": "HG-003",
                    "nameZh": "旧款",
                    "nameEn": "Old Model",
                    "onShelf": false,
                    "createdAt": "2024-05-03T00:00:00Z"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_search_uses_config_defaults() {
        let config = DeskConfig::default();
        let page = search_catalog(&catalog(), &config, SearchParams::default());

        assert_eq!(page.total, 2);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.items[0].code, "HG-002");

        let first = &page.items[1];
        assert_eq!(first.name, "保鲜盒");
        assert_eq!(first.price_label.as_deref(), Some("¥12.50"));
        assert_eq!(first.volume, Some(0.072));
        assert_eq!(
            first.image_url.as_deref(),
            Some("http://localhost:8080/uploads/products/hg-001.jpg")
        );
    }

    #[test]
    fn test_search_english_falls_back_to_chinese_name() {
        let config = DeskConfig::default();
        let params = SearchParams {
            keyword: Some("收纳".to_string()),
            locale: Some(Locale::En),
            ..SearchParams::default()
        };
        let page = search_catalog(&catalog(), &config, params);

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "收纳箱");
        assert_eq!(page.items[0].price_label, None);
        assert_eq!(page.items[0].image_url, None);
    }

    #[test]
    fn test_search_paging_and_off_shelf() {
        let mut config = DeskConfig::default();
        config.catalog.page_size = 1;

        let params = SearchParams {
            include_off_shelf: true,
            sort: SortOrder::CodeAsc,
            page: Some(3),
            ..SearchParams::default()
        };
        let page = search_catalog(&catalog(), &config, params);

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].code, "HG-003");
        assert!(!page.items[0].on_shelf);
        assert_eq!(page.items[0].volume, None);
    }
}
