//! Command implementations

mod forecast;
mod serve;

pub use forecast::{cmd_forecast, parse_expense_pairs, ForecastArgs};
pub use serve::cmd_serve;

use std::path::Path;

use anyhow::{Context, Result};

use fintwin_core::EngineConfig;

/// Load the engine config honoring an explicit --config path.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    EngineConfig::load(path).context("Failed to load engine config")
}

/// Print the effective engine configuration as TOML.
pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
