use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub crate_version: String,
}

impl SystemInfo {
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of a webhook self-test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookProbe {
    pub test_id: String,
    pub timestamp: String,
    pub status: String,
    pub system: SystemInfo,
    pub message: String,
}

/// Builds a probe payload and logs that it ran.
pub fn webhook_probe() -> WebhookProbe {
    let test_id: String = Uuid::new_v4().to_string().chars().take(8).collect();
    let timestamp = Local::now().to_rfc3339();
    let system = SystemInfo::current();

    info!("[TEST #{test_id}] Webhook test executed at: {timestamp}");
    info!(
        "[TEST #{test_id}] System: {} {}, recordtier {}",
        system.os, system.arch, system.crate_version
    );

    WebhookProbe {
        test_id,
        timestamp,
        status: "success".to_string(),
        system,
        message: "Webhook test executed successfully".to_string(),
    }
}
