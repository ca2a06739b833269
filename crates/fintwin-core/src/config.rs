//! Engine configuration
//!
//! Scenario growth rates, the default horizon, and the recommendation
//! thresholds are all tunable without recompiling. Resolution order:
//!
//! 1. Explicit path (`--config` / API embedding)
//! 2. `<config_dir>/fintwin/config.toml` (e.g. ~/.config/fintwin/config.toml)
//! 3. Compiled-in defaults
//!
//! A missing file at the default location is normal and silently falls back;
//! an explicitly named file that is missing or malformed is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ScenarioSet, DEFAULT_HORIZON};
use crate::recommend::RecommendationThresholds;

/// Tunable parameters of the projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Projection length in months when a request doesn't specify one.
    pub horizon: usize,
    /// Growth rates for the three named scenarios.
    pub scenarios: ScenarioSet,
    /// Savings-ratio boundaries for the advice tiers.
    pub thresholds: RecommendationThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            scenarios: ScenarioSet::default(),
            thresholds: RecommendationThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration, preferring an explicit path over the user config
    /// directory over built-in defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            let content = fs::read_to_string(path)?;
            return Self::from_toml(&content);
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                debug!(path = %path.display(), "Loading engine config override");
                let content = fs::read_to_string(&path)?;
                return Self::from_toml(&content);
            }
        }

        Ok(Self::default())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid config TOML: {e}")))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(format!("serialize config: {e}")))
    }
}

/// Default override location: `<config_dir>/fintwin/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fintwin").join("config.toml"))
}
