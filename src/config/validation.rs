//! Configuration file validation for recordtier

use crate::core::config::UnifiedConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration format: {reason}")]
    InvalidFormat { reason: String },

    #[error("Invalid configuration value: {reason}")]
    InvalidValue { reason: String },
}

/// Checks a configuration file and the environment it will be read in
pub struct ConfigValidator {
    config_path: PathBuf,
}

impl ConfigValidator {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn validate(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();

        self.validate_environment(&mut report);
        self.validate_config_file(&self.config_path, &mut report)?;

        Ok(report)
    }

    fn validate_environment(&self, report: &mut ValidationReport) {
        for var in ["RUST_LOG", super::paths::CONFIG_DIR_ENV] {
            match std::env::var(var) {
                Ok(value) => report.add_info(format!("Environment variable {var} = {value}")),
                Err(_) => report.add_info(format!("Environment variable {var} not set")),
            }
        }
    }

    fn validate_config_file(&self, path: &Path, report: &mut ValidationReport) -> Result<()> {
        if !path.exists() {
            report.add_warning(format!(
                "Configuration file {} not found, defaults will be used",
                path.display()
            ));
            return Ok(());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        match toml::from_str::<UnifiedConfig>(&content) {
            Ok(config) => {
                report.add_success(format!("Configuration file parses: {}", path.display()));
                match config.validate() {
                    Ok(()) => report.add_success(format!(
                        "Configuration values are valid (threshold {})",
                        config.processing.threshold
                    )),
                    Err(e) => report.add_error(ConfigValidationError::InvalidValue {
                        reason: e.to_string(),
                    }),
                }
            }
            Err(e) => {
                report.add_error(ConfigValidationError::InvalidFormat {
                    reason: e.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Validation report containing all findings
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
    pub successes: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        Self::default()
    }

    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    fn add_info(&mut self, info: String) {
        self.info.push(info);
    }

    fn add_success(&mut self, success: String) {
        self.successes.push(success);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn print_summary(&self) {
        println!("Configuration Validation Report");
        println!("==============================");

        if !self.successes.is_empty() {
            println!("\n✅ Successes:");
            for success in &self.successes {
                println!("   {success}");
            }
        }

        if !self.info.is_empty() {
            println!("\nℹ️  Information:");
            for info in &self.info {
                println!("   {info}");
            }
        }

        if !self.warnings.is_empty() {
            println!("\n⚠️  Warnings:");
            for warning in &self.warnings {
                println!("   {warning}");
            }
        }

        if !self.errors.is_empty() {
            println!("\n❌ Errors:");
            for error in &self.errors {
                println!("   {error}");
            }
        }

        println!("\nSummary: {} errors, {} warnings", self.errors.len(), self.warnings.len());
    }
}
