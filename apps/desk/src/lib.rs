//! # Hearth Desk
//!
//! Thin orchestration layer over `hearth-core`: loads configuration, holds
//! the working cart and catalog, and exposes every operation as a command.
//!
//! ## Module Organization
//! ```text
//! hearth_desk/
//! ├── lib.rs          ◄─── You are here (logging setup, exports)
//! ├── cli.rs          ◄─── clap subcommands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state (Arc<Mutex<Cart>>)
//! │   ├── catalog.rs  ◄─── Loaded product list
//! │   └── config.rs   ◄─── DeskConfig (TOML + HEARTH_* env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── catalog.rs  ◄─── Product search
//! │   ├── quote.rs    ◄─── Volume derivation, quote files
//! │   ├── export.rs   ◄─── Order CSV
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── ApiError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter, writes to stderr              │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration                                                  │
//! │     • defaults < hearth.toml < HEARTH_* environment                     │
//! │                                                                         │
//! │  3. Build State                                                         │
//! │     • CatalogState from a products file                                 │
//! │     • CartState from a quote file                                       │
//! │                                                                         │
//! │  4. Run Command                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use cli::{run, Cli};
pub use error::{ApiError, ConfigError, ErrorCode};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command invocation
/// - `RUST_LOG=hearth_desk=trace` - Trace this crate only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
