use anyhow::Result;
use async_trait::async_trait;

use crate::cli::commands::Command;
use crate::demo::webhook_probe;

pub struct WebhookCommand;

#[async_trait]
impl Command for WebhookCommand {
    async fn execute(&self) -> Result<()> {
        let probe = webhook_probe();
        println!("{}", serde_json::to_string_pretty(&probe)?);
        Ok(())
    }
}
