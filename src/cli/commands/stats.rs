use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;

use crate::cli::args::StatsArgs;
use crate::cli::commands::Command;
use crate::core::read_lines;
use crate::demo::NumberSeries;

pub struct StatsCommand {
    args: StatsArgs,
}

impl StatsCommand {
    pub fn new(args: StatsArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for StatsCommand {
    async fn execute(&self) -> Result<()> {
        let mut numbers = self.args.numbers.clone();

        if let Some(path) = &self.args.file {
            for line in read_lines(path).await? {
                let number: f64 = line
                    .parse()
                    .with_context(|| format!("Not a number in {}: {line:?}", path.display()))?;
                numbers.push(number);
            }
        }

        let mut series = NumberSeries::new(numbers);
        if self.args.double {
            series.process();
        }

        match series.statistics() {
            Some(stats) => {
                println!("{}", "Data Statistics:".cyan().bold());
                println!("- {}: {}", "Min".green(), stats.min);
                println!("- {}: {}", "Max".green(), stats.max);
                println!("- {}: {}", "Average".green(), stats.average);
            }
            None => println!("{}", "No numbers given".yellow()),
        }

        Ok(())
    }
}
