//! Platform-aware configuration paths for recordtier

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "RECORDTIER_CONFIG_DIR";

pub const CONFIG_FILE_NAME: &str = "recordtier.toml";

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join("recordtier"))
        .context("Unable to determine config directory for the current platform")
}

/// Path of the configuration file used when none is given explicitly
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Picks the explicit path when given, otherwise the platform default
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}
