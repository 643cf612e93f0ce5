use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigAction;
use crate::export::OutputFormat;

/// Main CLI structure for recordtier.
///
/// # Examples
///
/// ```bash
/// # Classify a JSON array of records with a custom threshold
/// recordtier classify --input records.json --threshold 20
///
/// # Render a Markdown report from stdin
/// cat records.json | recordtier classify --format markdown
///
/// # Summary statistics for a few numbers
/// recordtier stats 1 2 3 4 5 --double
/// ```
#[derive(Parser)]
#[command(name = "recordtier")]
#[command(about = "Classify, enrich and aggregate schema-less records by value tier")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify records from a JSON array
    Classify {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Tier threshold, overrides the configuration file
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format, overrides the configuration file
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Minimum, maximum and average of a list of numbers
    Stats {
        /// Numbers to summarize
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,

        /// Read additional numbers from a file, one per line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Double every number before summarizing
        #[arg(long)]
        double: bool,
    },

    /// Call a simulated flaky endpoint with retries and backoff
    RetryDemo {
        /// Number of concurrent calls
        #[arg(long, default_value = "5")]
        calls: u32,

        /// Probability that a single attempt fails
        #[arg(long, default_value = "0.3")]
        failure_rate: f64,

        /// Retries per call, overrides the configuration file
        #[arg(long)]
        max_retries: Option<u32>,

        /// Seed for reproducible failures
        #[arg(long)]
        seed: Option<u64>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Emit a webhook self-test payload
    Webhook,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// Argument structures for command handlers
pub struct ClassifyArgs {
    pub input: Option<PathBuf>,
    pub threshold: Option<u32>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub struct StatsArgs {
    pub numbers: Vec<f64>,
    pub file: Option<PathBuf>,
    pub double: bool,
}

pub struct RetryDemoArgs {
    pub calls: u32,
    pub failure_rate: f64,
    pub max_retries: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}
