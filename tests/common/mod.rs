#![allow(dead_code)]

use record_tier::core::types::Record;
use record_tier::parse_records;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::fs;

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use super::*;

    /// A tagged high-value user, a discounted medium product and a short
    /// low-tier text record with nested metadata.
    pub const MIXED_BATCH: &str = r#"[
        {
            "type": "user",
            "username": "john_doe",
            "email": "john@example.com",
            "value": 25,
            "tags": [{"name": "electronics", "category": "tech"}],
            "description": "Customer with urgent requirements"
        },
        {
            "type": "product",
            "name": "Laptop",
            "price": 999.99,
            "quantity": 2,
            "discount": 10,
            "value": 15
        },
        {
            "value": "short",
            "metadata": {"source": "web", "nested": {"level": 1}}
        }
    ]"#;

    /// One record per tier with no optional enrichment inputs.
    pub const ONE_PER_TIER: &str = r#"[
        {"type": "user", "username": "john_doe", "email": "john@example.com", "value": 15},
        {"type": "product", "name": "Laptop", "price": 999.99, "quantity": 2, "discount": 10, "value": 25},
        {"value": 5}
    ]"#;

    pub fn one_per_tier() -> Vec<Record> {
        parse_records(ONE_PER_TIER).expect("one-per-tier batch is valid JSON")
    }

    pub fn mixed_batch() -> Vec<Record> {
        parse_records(MIXED_BATCH).expect("mixed batch is valid JSON")
    }

    pub fn numeric_records(values: &[i64]) -> Vec<Record> {
        values.iter().map(|v| Record::new().with("value", *v)).collect()
    }

    /// Writes `content` to a file inside a fresh temporary directory.
    pub async fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, content).await.expect("write temp file");
        (dir, path)
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}
