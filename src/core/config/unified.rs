use crate::core::constants::DEFAULT_THRESHOLD;
use crate::demo::retry::RetryPolicy;
use crate::error::{TierError, TierResult};
use crate::export::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifiedConfig {
    /// Tier classification settings
    pub processing: ProcessingConfig,

    /// Backoff settings for the retrying client
    pub retry: RetryConfig,

    /// Report rendering
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Numbers strictly above `2 * threshold` are high, strictly above
    /// `threshold` medium.
    pub threshold: u32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ProcessingConfig {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> TierResult<()> {
        if self.threshold == 0 {
            return Err(TierError::Validation {
                field: "processing.threshold".to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Upper bound of the random jitter as a fraction of the current delay
    pub jitter_ratio: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            jitter_ratio: 0.5,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            backoff_multiplier: self.backoff_multiplier,
            max_delay: Duration::from_millis(self.max_delay_ms),
            jitter_ratio: self.jitter_ratio,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl UnifiedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`, or fall back to defaults when the file is absent.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.processing.validate()?;

        if self.retry.backoff_multiplier < 1.0 {
            anyhow::bail!("Backoff multiplier must be at least 1.0");
        }

        if !(0.0..=1.0).contains(&self.retry.jitter_ratio) {
            anyhow::bail!("Jitter ratio must be between 0.0 and 1.0");
        }

        if self.retry.initial_delay_ms > self.retry.max_delay_ms {
            anyhow::bail!("Initial retry delay cannot exceed the maximum delay");
        }

        Ok(())
    }
}
