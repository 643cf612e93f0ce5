pub mod paths;
pub mod validation;

pub use paths::{config_dir, default_config_path, resolve_config_path};
pub use validation::{ConfigValidationError, ConfigValidator, ValidationReport};

use clap::Subcommand;
use std::path::PathBuf;

/// Configuration actions for recordtier
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init {
        /// Target file (defaults to the platform config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show {
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}
