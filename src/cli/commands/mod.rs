use anyhow::Result;
use async_trait::async_trait;

pub mod classify;
pub mod config;
pub mod retry_demo;
pub mod stats;
pub mod webhook;

pub use classify::ClassifyCommand;
pub use config::ConfigCommand;
pub use retry_demo::RetryDemoCommand;
pub use stats::StatsCommand;
pub use webhook::WebhookCommand;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::config::default_config_path;
    use crate::core::config::UnifiedConfig;
    use anyhow::{Context, Result};
    use std::path::{Path, PathBuf};
    use tokio::fs;
    use tracing::{debug, warn};

    /// Loads an explicitly named config file, or the platform default when
    /// it exists. An explicit file must exist.
    pub async fn load_config(explicit: Option<&Path>) -> Result<UnifiedConfig> {
        if let Some(path) = explicit {
            return UnifiedConfig::load(path)
                .await
                .with_context(|| format!("Failed to load configuration from {}", path.display()));
        }

        match default_config_path() {
            Ok(path) => {
                debug!("Using configuration at {}", path.display());
                UnifiedConfig::load_or_default(&path).await
            }
            Err(e) => {
                warn!("{e}, using default configuration");
                Ok(UnifiedConfig::default())
            }
        }
    }

    /// Writes `content` to `output`, or prints it when no file is given.
    pub async fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
        match output {
            Some(path) => {
                fs::write(path, content)
                    .await
                    .with_context(|| format!("Failed to write output to {}", path.display()))?;
                eprintln!("Output written to {}", path.display());
            }
            None => println!("{content}"),
        }
        Ok(())
    }
}
