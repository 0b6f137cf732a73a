//! # Config Commands

use tracing::debug;

use crate::state::DeskConfig;

/// Gets the current desk configuration (read-only).
pub fn get_config(config: &DeskConfig) -> DeskConfig {
    debug!("get_config command");
    config.clone()
}
