pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;

use args::{ClassifyArgs, RetryDemoArgs, StatsArgs};
use commands::{
    ClassifyCommand, Command, ConfigCommand, RetryDemoCommand, StatsCommand, WebhookCommand,
};

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("record_tier={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Classify {
            input,
            threshold,
            config,
            format,
            output,
        } => {
            ClassifyCommand::new(ClassifyArgs {
                input,
                threshold,
                config,
                format,
                output,
            })
            .execute()
            .await?;
        }

        Commands::Stats {
            numbers,
            file,
            double,
        } => {
            StatsCommand::new(StatsArgs {
                numbers,
                file,
                double,
            })
            .execute()
            .await?;
        }

        Commands::RetryDemo {
            calls,
            failure_rate,
            max_retries,
            seed,
            config,
        } => {
            RetryDemoCommand::new(RetryDemoArgs {
                calls,
                failure_rate,
                max_retries,
                seed,
                config,
            })
            .execute()
            .await?;
        }

        Commands::Webhook => {
            WebhookCommand.execute().await?;
        }

        Commands::Config { action } => {
            ConfigCommand::new(action).execute().await?;
        }
    }

    Ok(())
}
