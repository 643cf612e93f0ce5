//! Configuration persistence and validation through the public API.

use super::common::test_helpers::write_temp_file;
use record_tier::config::{ConfigValidator, ValidationReport};
use record_tier::core::config::UnifiedConfig;
use record_tier::export::OutputFormat;
use tempfile::TempDir;

#[tokio::test]
async fn test_saved_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recordtier.toml");

    let mut config = UnifiedConfig::default();
    config.processing.threshold = 7;
    config.retry.max_retries = 5;
    config.output.format = OutputFormat::Summary;
    config.save(&path).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(content.contains("threshold = 7"));
    assert!(content.contains("format = \"summary\""));

    assert_eq!(UnifiedConfig::load(&path).await.unwrap(), config);
}

#[tokio::test]
async fn test_invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recordtier.toml");

    let mut config = UnifiedConfig::default();
    config.processing.threshold = 0;

    assert!(config.save(&path).await.is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_load_rejects_invalid_values() {
    let (_dir, path) = write_temp_file("bad.toml", "[retry]\njitter_ratio = 2.0\n").await;
    assert!(UnifiedConfig::load(&path).await.is_err());
}

#[tokio::test]
async fn test_validator_report_for_saved_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recordtier.toml");
    UnifiedConfig::default().save(&path).await.unwrap();

    let report: ValidationReport = ConfigValidator::new(&path).validate().unwrap();
    assert!(!report.has_errors());
    assert!(report.warnings.is_empty());
}
