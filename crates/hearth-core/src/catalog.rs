//! # Catalog Browsing
//!
//! Filter, sort and paginate an in-memory product list the way the product
//! listing and admin product screens do.
//!
//! ## Pipeline
//! ```text
//! products ──► filter ──► sort ──► page
//!              │          │        │
//!              │          │        └─ 1-based, page_size ≥ 1
//!              │          └─ stable: ties keep input order
//!              └─ on shelf, category, keyword on code / zh / en name
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CatalogProduct, Locale};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    Newest,
    CodeAsc,
    /// Cheapest first; products without a price last.
    PriceAsc,
    /// Most expensive first; products without a price last.
    PriceDesc,
    /// By display name in the requested locale, compared by Unicode code
    /// point. There is no collation: Chinese names do not come out in pinyin
    /// or stroke order.
    NameAsc,
}

impl std::str::FromStr for SortOrder {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "newest" => Ok(SortOrder::Newest),
            "code" | "code_asc" => Ok(SortOrder::CodeAsc),
            "price" | "price_asc" => Ok(SortOrder::PriceAsc),
            "price_desc" => Ok(SortOrder::PriceDesc),
            "name" | "name_asc" => Ok(SortOrder::NameAsc),
            other => Err(crate::ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!(
                    "unknown sort '{}', expected newest, code, price, price_desc or name",
                    other
                ),
            }),
        }
    }
}

/// Listing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub include_off_shelf: bool,
    pub sort: SortOrder,
    pub locale: Locale,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            keyword: None,
            category: None,
            include_off_shelf: false,
            sort: SortOrder::default(),
            locale: Locale::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches across all pages
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Runs the filter → sort → page pipeline.
///
/// ## Example
/// ```rust
/// use hearth_core::catalog::{browse, CatalogQuery};
///
/// let page = browse(&[], &CatalogQuery::default());
/// assert_eq!(page.total, 0);
/// assert_eq!(page.total_pages, 0);
/// ```
pub fn browse(products: &[CatalogProduct], query: &CatalogQuery) -> Page<CatalogProduct> {
    let keyword = query
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<&CatalogProduct> = products
        .iter()
        .filter(|p| query.include_off_shelf || p.on_shelf)
        .filter(|p| match &query.category {
            Some(category) => p.category.as_deref() == Some(category.as_str()),
            None => true,
        })
        .filter(|p| match &keyword {
            Some(k) => matches_keyword(p, k),
            None => true,
        })
        .collect();

    sort_products(&mut matches, query.sort, query.locale);

    let page = query.page.max(1);
    let page_size = query.page_size.max(1);
    let total = matches.len();

    let items = matches
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size),
    }
}

fn matches_keyword(product: &CatalogProduct, keyword: &str) -> bool {
    [&product.code, &product.name_zh, &product.name_en]
        .iter()
        .any(|field| field.to_lowercase().contains(keyword))
}

fn sort_products(products: &mut [&CatalogProduct], sort: SortOrder, locale: Locale) {
    match sort {
        SortOrder::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::CodeAsc => products.sort_by(|a, b| a.code.cmp(&b.code)),
        SortOrder::PriceAsc => products.sort_by(|a, b| cmp_price(a.unit_price, b.unit_price, false)),
        SortOrder::PriceDesc => products.sort_by(|a, b| cmp_price(a.unit_price, b.unit_price, true)),
        SortOrder::NameAsc => {
            products.sort_by(|a, b| a.display_name(locale).cmp(b.display_name(locale)))
        }
    }
}

// Missing prices sort last in both directions
fn cmp_price(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
