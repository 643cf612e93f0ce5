use anyhow::Result;
use async_trait::async_trait;

use crate::cli::commands::Command;
use crate::config::{resolve_config_path, ConfigAction, ConfigValidator};
use crate::core::config::UnifiedConfig;

pub struct ConfigCommand {
    action: ConfigAction,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction) -> Self {
        Self { action }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { path, force } => {
                let config_path = resolve_config_path(path.clone())?;
                if config_path.exists() && !force {
                    anyhow::bail!(
                        "Configuration already exists at {} (use --force to overwrite)",
                        config_path.display()
                    );
                }
                UnifiedConfig::default().save(&config_path).await?;
                println!("Configuration initialized at {}", config_path.display());
            }

            ConfigAction::Show { path } => {
                let config_path = resolve_config_path(path.clone())?;
                if !config_path.exists() {
                    println!("No configuration file found. Showing defaults; use 'config init' to create one.");
                }
                let config = UnifiedConfig::load_or_default(&config_path).await?;
                println!("{}", toml::to_string_pretty(&config)?);
            }

            ConfigAction::Validate { path } => {
                let config_path = resolve_config_path(path.clone())?;
                let report = ConfigValidator::new(config_path).validate()?;
                report.print_summary();
                if report.has_errors() {
                    anyhow::bail!(
                        "Configuration validation failed with {} errors",
                        report.errors.len()
                    );
                }
            }
        }

        Ok(())
    }
}
