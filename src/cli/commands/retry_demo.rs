use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use tracing::info;

use crate::cli::args::RetryDemoArgs;
use crate::cli::commands::Command;
use crate::demo::{timed_async, ApiRequest, RetryingClient, SimulatedEndpoint};

use super::utils::load_config;

pub struct RetryDemoCommand {
    args: RetryDemoArgs,
}

impl RetryDemoCommand {
    pub fn new(args: RetryDemoArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for RetryDemoCommand {
    async fn execute(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.args.failure_rate) {
            anyhow::bail!("Failure rate must be between 0.0 and 1.0");
        }

        let config = load_config(self.args.config.as_deref()).await?;
        let mut policy = config.retry.to_policy();
        if let Some(max_retries) = self.args.max_retries {
            policy.max_retries = max_retries;
        }

        let endpoint = match self.args.seed {
            Some(seed) => SimulatedEndpoint::with_seed(self.args.failure_rate, seed),
            None => SimulatedEndpoint::new(self.args.failure_rate),
        };
        let client = RetryingClient::new(endpoint, policy);
        let client = match self.args.seed {
            Some(seed) => client.with_jitter_seed(seed),
            None => client,
        };

        let requests: Vec<ApiRequest> = (0..self.args.calls)
            .map(|id| ApiRequest::new(id, format!("/records/{id}")))
            .collect();

        let (outcomes, elapsed) = timed_async("retry demo", client.call_batch(&requests)).await;

        let mut succeeded = 0;
        for (request, outcome) in requests.iter().zip(&outcomes) {
            match outcome {
                Ok(response) => {
                    succeeded += 1;
                    println!(
                        "{} {} -> {} after {} attempt(s)",
                        "✓".green(),
                        request.path,
                        response.status,
                        response.attempts
                    );
                }
                Err(error) => println!("{} {} -> {}", "✗".red(), request.path, error),
            }
        }

        info!(
            "{} endpoint calls for {} requests in {:?}",
            client.endpoint().calls(),
            requests.len(),
            elapsed
        );
        println!(
            "\n{} {}/{} succeeded",
            "Summary:".bold(),
            succeeded,
            requests.len()
        );

        Ok(())
    }
}
