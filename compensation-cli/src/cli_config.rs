//! CLI configuration loader and runtime defaults.
//!
//! ```toml
//! [plan]
//! bv_to_pv_ratio = 3.36
//! csi_cap = 75.0
//!
//! [generator]
//! month = 12
//! frontline_count = 20
//! downline_count = 30
//! ```
//!
//! Every key is optional; missing keys take the published plan defaults.

use crate::error::{CliError, CliResult};
use lib_compensation::{CompensationPlan, DownlineShape};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "compensation.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    pub plan: CompensationPlan,
    pub generator: DownlineShape,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILENAME)
}

/// Load the config at `path`, or the default file when present
///
/// An explicit path must exist. A missing default file yields the built-in
/// defaults.
pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    load_config_strict(&config_path)
}

pub fn load_config_strict(path: &Path) -> CliResult<CliConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::ConfigError(format!("Failed to read config: {}", e)))?;

    let config: CliConfig = toml::from_str(&raw)
        .map_err(|e| CliError::ConfigError(format!("Invalid CLI config: {}", e)))?;

    config
        .plan
        .validate()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
