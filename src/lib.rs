//! # recordtier
//!
//! Tier classification, enrichment and aggregation of schema-less records.
//!
//! Every record carrying a `value` field is placed in the high, medium or low
//! tier relative to a threshold, receives tier-specific derived fields, and
//! feeds the user and product side collections when its `type` asks for it.
//!
//! ## Quick Start
//!
//! ```rust
//! use record_tier::{parse_records, process_records, Tier};
//!
//! let records = parse_records(r#"[{"value": 25}, {"value": "hi"}]"#).unwrap();
//! let result = process_records(&records, None);
//! assert_eq!(result.count(Tier::High), Some(1));
//! assert_eq!(result.count(Tier::Low), Some(1));
//! ```
//!
//! ## Module Overview
//!
//! - [`core`] - Record model, classifier, enrichers and the processing run
//! - [`export`] - Rendering aggregation results as JSON, Markdown or a summary
//! - [`demo`] - Statistics, timing, retrying client and webhook probe helpers
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file locations and CLI config actions

/// Command-line interface and argument parsing
pub mod cli;
/// Configuration file locations and actions
pub mod config;
/// Record model, classification and aggregation
pub mod core;
/// Auxiliary helpers exercised by the CLI
pub mod demo;
/// Error types and handling utilities
pub mod error;
/// Result rendering
pub mod export;

pub use core::*;
/// Re-export main error types for convenient error handling
pub use error::{ErrorContext, TierError, TierResult};
