//! # Desk Configuration
//!
//! Store, currency and asset settings, read-only after startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HEARTH_STORE_NAME, HEARTH_LOCALE, HEARTH_CURRENCY,                 │
//! │     HEARTH_IMAGE_BASE_URL, HEARTH_PAGE_SIZE                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, else ./hearth.toml, else                          │
//! │     ~/.config/hearth/hearth.toml (Linux)                               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Hearth Household Goods"
//! default_locale = "zh"
//!
//! [currency]
//! code = "CNY"
//! symbol = "¥"
//! decimals = 2
//!
//! [assets]
//! image_base_url = "https://cdn.example.com/uploads"
//!
//! [catalog]
//! page_size = 20
//!
//! [export]
//! excel_bom = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use hearth_core::catalog::DEFAULT_PAGE_SIZE;
use hearth_core::rounding::{format_fixed, round_to};
use hearth_core::{ExportOptions, Locale};

use crate::error::{ConfigError, ConfigResult};

/// File name looked up when no `--config` path is given.
pub const CONFIG_FILE_NAME: &str = "hearth.toml";

const MAX_PAGE_SIZE: usize = 200;
const MAX_CURRENCY_DECIMALS: u32 = 4;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Language used when a request does not name one.
    #[serde(default)]
    pub default_locale: Locale,
}

fn default_store_name() -> String {
    "Hearth Household Goods".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            default_locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code
    #[serde(default = "default_currency_code")]
    pub code: String,

    #[serde(default = "default_currency_symbol")]
    pub symbol: String,

    #[serde(default = "default_currency_decimals")]
    pub decimals: u32,
}

fn default_currency_code() -> String {
    "CNY".to_string()
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

fn default_currency_decimals() -> u32 {
    2
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
            decimals: default_currency_decimals(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Prefix for relative product image paths.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_image_base_url() -> String {
    "http://localhost:8080/uploads".to_string()
}

impl Default for AssetSettings {
    fn default() -> Self {
        AssetSettings {
            image_base_url: default_image_base_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Prefix CSV exports with a UTF-8 BOM so spreadsheet apps detect the
    /// encoding.
    #[serde(default = "default_true")]
    pub excel_bom: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings { excel_bom: true }
    }
}

// =============================================================================
// DeskConfig
// =============================================================================

/// Complete desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

impl DeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` must exist; the fallback locations are
    /// optional.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading config from file");
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) => {
                    info!(?path, "Loading config from file");
                    Self::from_file(&path)?
                }
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::invalid("store.name", "must not be empty"));
        }

        if self.currency.code.trim().is_empty() {
            return Err(ConfigError::invalid("currency.code", "must not be empty"));
        }

        if self.currency.decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::invalid(
                "currency.decimals",
                format!("must be at most {}", MAX_CURRENCY_DECIMALS),
            ));
        }

        let base = &self.assets.image_base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::invalid(
                "assets.image_base_url",
                format!("must start with http:// or https://, got: {}", base),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.catalog.page_size) {
            return Err(ConfigError::invalid(
                "catalog.page_size",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }

        Ok(())
    }

    /// Applies `HEARTH_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("HEARTH_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(locale) = lookup("HEARTH_LOCALE") {
            match locale.parse::<Locale>() {
                Ok(parsed) => {
                    debug!(locale = %parsed, "Overriding default locale from environment");
                    self.store.default_locale = parsed;
                }
                Err(_) => warn!(locale = %locale, "Unknown locale in environment"),
            }
        }

        if let Some(code) = lookup("HEARTH_CURRENCY") {
            self.currency.code = code;
        }

        if let Some(url) = lookup("HEARTH_IMAGE_BASE_URL") {
            debug!(url = %url, "Overriding image base URL from environment");
            self.assets.image_base_url = url;
        }

        if let Some(size) = lookup("HEARTH_PAGE_SIZE") {
            match size.parse::<usize>() {
                Ok(p) => self.catalog.page_size = p,
                Err(_) => warn!(page_size = %size, "Invalid page size in environment"),
            }
        }
    }

    /// First existing config file among the working directory and the
    /// platform config directory.
    fn default_config_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        directories::ProjectDirs::from("com", "hearth", "hearth")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolves a product image path against the image base URL.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_desk::state::DeskConfig;
    ///
    /// let config = DeskConfig::default();
    /// assert_eq!(
    ///     config.image_url("/products/hg-001.jpg").as_deref(),
    ///     Some("http://localhost:8080/uploads/products/hg-001.jpg")
    /// );
    /// assert_eq!(config.image_url("  "), None);
    /// ```
    pub fn image_url(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }

        Some(format!(
            "{}/{}",
            self.assets.image_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_desk::state::DeskConfig;
    ///
    /// let config = DeskConfig::default();
    /// assert_eq!(config.format_currency(312.5), "¥312.50");
    /// assert_eq!(config.format_currency(-12.5), "-¥12.50");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        let decimals = self.currency.decimals;
        let rounded = round_to(amount, decimals);

        if rounded < 0.0 {
            format!("-{}{}", self.currency.symbol, format_fixed(-rounded, decimals))
        } else {
            format!("{}{}", self.currency.symbol, format_fixed(rounded, decimals))
        }
    }

    /// CSV export settings for `locale`.
    pub fn export_options(&self, locale: Locale) -> ExportOptions {
        ExportOptions {
            locale,
            currency_decimals: self.currency.decimals,
            include_bom: self.export.excel_bom,
        }
    }
}
