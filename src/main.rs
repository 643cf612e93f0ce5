use anyhow::Result;
use record_tier::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
