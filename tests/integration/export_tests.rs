//! Rendering processed batches in each output format.

use super::common::test_helpers::mixed_batch;
use record_tier::export::{ExportService, OutputFormat};
use record_tier::process_records;

#[test]
fn test_json_export_parses_back() {
    let result = process_records(&mixed_batch(), None);
    let json = ExportService::new().export(&result, OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["high_count"], 1);
    assert_eq!(parsed["products"][0]["name"], "Laptop");
    assert_eq!(parsed["low"][0]["processed"], true);
}

#[test]
fn test_summary_export() {
    let result = process_records(&mixed_batch(), None);
    let summary = ExportService::new().export(&result, OutputFormat::Summary).unwrap();

    assert_eq!(
        summary,
        "high: 1\nmedium: 1\nlow: 1\nusers: 1 (1 valid)\nproducts: 1 (total 1999.98, discounted 1799.98)"
    );
}

#[test]
fn test_markdown_export() {
    let result = process_records(&mixed_batch(), None);
    let markdown = ExportService::new().export(&result, OutputFormat::Markdown).unwrap();

    assert!(markdown.starts_with("# Record Classification Report"));
    assert!(markdown.contains("## High tier"));
    assert!(markdown.contains("| john_doe | john@example.com | ✅ |"));
    assert!(markdown.contains("| Laptop | 1999.98 | 1799.98 |"));
}
