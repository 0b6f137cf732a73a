//! # Command Line
//!
//! `clap` front end over [`crate::commands`]. JSON and CSV go to stdout,
//! logs go to stderr.
//!
//! ```text
//! hearth-desk volume "74*44*20cm"
//! hearth-desk line --spec "74*44*20" --packing 6 --quantity 20 --price 48.75
//! hearth-desk quote order.json
//! hearth-desk export order.json -o order.csv --locale en
//! hearth-desk catalog products.json --keyword cup --sort price
//! hearth-desk config
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use hearth_core::rounding::format_trimmed;
use hearth_core::{Locale, SortOrder, VOLUME_DECIMALS};

use crate::commands;
use crate::commands::catalog::SearchParams;
use crate::commands::quote::LineFormText;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, DeskConfig};

#[derive(Debug, Parser)]
#[command(name = "hearth-desk")]
#[command(about = "Carton, packing and pricing tools for the Hearth storefront", long_about = None)]
pub struct Cli {
    /// Config file (default: ./hearth.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output language: zh or en (default: store.default_locale)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive the carton volume (m³) from a carton specification
    Volume {
        /// Carton specification, e.g. "74*44*20cm"
        spec: String,
    },

    /// Derive one line from SKU form values and print it as JSON
    Line {
        /// Carton specification, e.g. "74*44*20cm"
        #[arg(long, default_value = "")]
        spec: String,

        /// Units per carton (blank: unknown)
        #[arg(long, default_value = "")]
        packing: String,

        #[arg(long)]
        quantity: String,

        /// Unit price (blank: unknown)
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Run all derivations on a list of order lines and print the cart as JSON
    Quote {
        /// JSON array of order lines
        cart_json: PathBuf,
    },

    /// Write the order CSV for a list of order lines
    Export {
        /// JSON array of order lines
        cart_json: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter, sort and page a product list
    Catalog {
        /// JSON array of catalog products
        products_json: PathBuf,

        /// Match against code and both names
        #[arg(long)]
        keyword: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// newest, code, price, price_desc or name
        #[arg(long, default_value = "newest")]
        sort: SortOrder,

        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,

        /// Include products that are off shelf
        #[arg(long)]
        all: bool,
    },

    /// Print the effective configuration
    Config,
}

/// Loads configuration and runs one subcommand.
pub fn run(cli: Cli) -> Result<(), ApiError> {
    let config = DeskConfig::load(cli.config.as_deref())?;
    info!(store = %config.store.name, "Configuration loaded");

    match cli.command {
        Commands::Volume { spec } => {
            println!("{}", describe_volume(&spec));
        }
        Commands::Line {
            spec,
            packing,
            quantity,
            price,
        } => {
            let form = commands::quote::derive_line(&LineFormText {
                carton_specification: spec,
                packing_quantity: packing,
                item_quantity: quantity,
                unit_price: price,
            })?;
            if form.has_packing_remainder() {
                eprintln!("Warning: the last carton is only partly filled");
            }
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        Commands::Quote { cart_json } => {
            let cart = load_quote(&cart_json)?;
            let response = commands::cart::get_cart(&cart);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Export { cart_json, output } => {
            let cart = load_quote(&cart_json)?;
            let csv = commands::export::export_cart_csv(&cart, &config, cli.locale)?;
            match output {
                Some(path) => {
                    commands::export::write_export(&csv, &path)?;
                    println!("Order CSV written to {}", path.display());
                }
                None => print!("{}", csv),
            }
        }
        Commands::Catalog {
            products_json,
            keyword,
            category,
            sort,
            page,
            all,
        } => {
            let catalog = CatalogState::load(&products_json)?;
            let params = SearchParams {
                keyword,
                category,
                include_off_shelf: all,
                sort,
                locale: cli.locale,
                page,
                page_size: None,
            };
            let page = commands::catalog::search_catalog(&catalog, &config, params);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Config => {
            let config = commands::config::get_config(&config);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load_quote(path: &Path) -> Result<CartState, ApiError> {
    let json = std::fs::read_to_string(path)?;
    let lines = commands::quote::parse_quote_lines(&json)?;

    let cart = CartState::new();
    commands::quote::quote_lines(&cart, &lines)?;
    Ok(cart)
}

/// One-line answer for the `volume` subcommand.
fn describe_volume(spec: &str) -> String {
    let response = commands::quote::derive_volume(spec);
    match (response.volume, response.dimensions) {
        (Some(volume), Some(d)) => format!(
            "{} m³ ({} × {} × {} cm)",
            format_trimmed(volume, VOLUME_DECIMALS),
            d.length_cm,
            d.width_cm,
            d.height_cm
        ),
        _ => format!(
            "No volume derived from '{}': expected L*W*H with optional cm suffix",
            spec
        ),
    }
}
