use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::io::{self, Read};
use tracing::info;

use crate::cli::args::ClassifyArgs;
use crate::cli::commands::Command;
use crate::core::{load_records, parse_records, process_records, ProcessingConfig};
use crate::demo::timed;
use crate::export::{ExportService, OutputFormat};

use super::utils::{load_config, write_output};

pub struct ClassifyCommand {
    args: ClassifyArgs,
}

impl ClassifyCommand {
    pub fn new(args: ClassifyArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ClassifyCommand {
    async fn execute(&self) -> Result<()> {
        let config = load_config(self.args.config.as_deref()).await?;

        let processing = ProcessingConfig::new(
            self.args.threshold.unwrap_or(config.processing.threshold),
        );
        processing.validate()?;
        let format = self.args.format.unwrap_or(config.output.format);

        let records = match &self.args.input {
            Some(path) => load_records(path).await?,
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read records from stdin")?;
                parse_records(&buffer)?
            }
        };

        let (result, elapsed) = timed("classification", || {
            process_records(&records, Some(&processing))
        });
        info!(
            "Classified {} records in {:?} (threshold {})",
            records.len(),
            elapsed,
            processing.threshold
        );

        let rendered = ExportService::new().export(&result, format)?;

        if format == OutputFormat::Summary && self.args.output.is_none() {
            println!("{}", "Classification summary".cyan().bold());
            for line in rendered.lines() {
                match line.split_once(':') {
                    Some((label, rest)) => println!("  {}:{}", label.green(), rest),
                    None => println!("  {line}"),
                }
            }
            return Ok(());
        }

        write_output(&rendered, self.args.output.as_ref()).await
    }
}
