//! # End-to-End Integration Tests
//!
//! Runs record batches through parsing, classification, enrichment and side
//! aggregation and checks the serialized result.

use super::common::test_helpers::{
    approx_eq, mixed_batch, numeric_records, one_per_tier, write_temp_file, MIXED_BATCH,
};
use pretty_assertions::assert_eq;
use record_tier::core::types::{Record, Tier, Value};
use record_tier::{load_records, process_records, ProcessingConfig};
use serde_json::json;

#[test]
fn test_mixed_batch_counts_and_side_collections() {
    let result = process_records(&mixed_batch(), None);

    assert_eq!(result.count(Tier::High), Some(1));
    assert_eq!(result.count(Tier::Medium), Some(1));
    assert_eq!(result.count(Tier::Low), Some(1));

    let users = result.users().expect("users collection");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, Value::from("john_doe"));
    assert!(users[0].is_valid);

    let products = result.products().expect("products collection");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, Value::from("Laptop"));
    assert!(approx_eq(products[0].total_amount(), 1999.98));
    assert!(approx_eq(products[0].discounted_amount(), 1799.982));
}

#[test]
fn test_one_record_per_tier_at_threshold_ten() {
    let config = ProcessingConfig::new(10);
    let result = process_records(&one_per_tier(), Some(&config));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json["high"],
        json!([{
            "type": "product",
            "name": "Laptop",
            "price": 999.99,
            "quantity": 2,
            "discount": 10,
            "value": 25,
            "factorial": 120
        }])
    );
    assert_eq!(
        json["medium"],
        json!([{"type": "user", "username": "john_doe", "email": "john@example.com", "value": 15}])
    );
    assert_eq!(json["low"], json!([{"value": 5, "processed": true}]));
    assert_eq!(
        json["users"],
        json!([{"username": "john_doe", "email": "john@example.com", "is_valid": true}])
    );
    assert_eq!(json["high_count"], json!(1));
    assert_eq!(json["medium_count"], json!(1));
    assert_eq!(json["low_count"], json!(1));

    let products = result.products().expect("products collection");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, Value::from("Laptop"));
    assert!(approx_eq(products[0].total_amount(), 1999.98));
    assert!(approx_eq(products[0].discounted_amount(), 1799.982));
}

#[test]
fn test_mixed_batch_enrichment() {
    let result = process_records(&mixed_batch(), None);

    let high = &result.bucket(Tier::High)[0];
    assert_eq!(high.get("tag_count"), Some(&Value::Int(1)));
    assert_eq!(high.get("has_priority"), Some(&Value::Bool(false)));
    assert_eq!(high.get("long_word_count"), Some(&Value::Int(3)));
    assert_eq!(high.get("has_priority_keywords"), Some(&Value::Bool(true)));
    assert_eq!(high.get("factorial"), Some(&Value::Int(120)));

    let medium = &result.bucket(Tier::Medium)[0];
    assert!(!medium.contains("metadata"));
    assert!(!medium.contains("processed"));

    let low = &result.bucket(Tier::Low)[0];
    assert_eq!(low.get("processed"), Some(&Value::Bool(true)));
    // Low tier leaves metadata as it was
    assert_eq!(
        low.get("metadata").map(Value::to_string),
        Some(r#"{"source":"web","nested":{"level":1}}"#.to_string())
    );
}

#[test]
fn test_serialized_shape() {
    let result = process_records(&mixed_batch(), None);
    let json = serde_json::to_value(&result).unwrap();

    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["high", "medium", "low", "users", "products", "high_count", "medium_count", "low_count"]
    );
    assert_eq!(json["high"][0]["categories"], json!(["tech"]));
    assert_eq!(
        json["users"],
        json!([{"username": "john_doe", "email": "john@example.com", "is_valid": true}])
    );
}

#[test]
fn test_processing_is_idempotent() {
    let records = mixed_batch();
    let first = process_records(&records, None);
    let second = process_records(&records, None);

    assert_eq!(first, second);
    assert_eq!(records, mixed_batch());
}

#[test]
fn test_value_less_records_do_not_count() {
    let mut records = mixed_batch();
    records.push(
        Record::new()
            .with("type", "product")
            .with("price", 10)
            .with("quantity", 1),
    );
    records.push(Record::new());

    let result = process_records(&records, None);

    let counts = result.counts().unwrap();
    assert_eq!(counts.total(), 3);
    assert_eq!(result.products().map(<[_]>::len), Some(1));
}

#[test]
fn test_threshold_changes_tiers() {
    let records = numeric_records(&[1, 6, 11, 21, 41]);

    let default = process_records(&records, None);
    assert_eq!(default.count(Tier::High), Some(2));
    assert_eq!(default.count(Tier::Medium), Some(1));
    assert_eq!(default.count(Tier::Low), Some(2));

    let config = ProcessingConfig::new(3);
    let lowered = process_records(&records, Some(&config));
    assert_eq!(lowered.count(Tier::High), Some(3));
    assert_eq!(lowered.count(Tier::Medium), Some(1));
    assert_eq!(lowered.count(Tier::Low), Some(1));
}

#[test]
fn test_empty_input_yields_empty_object() {
    let result = process_records(&[], None);
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({}));
}

#[tokio::test]
async fn test_load_and_process_from_file() {
    let (_dir, path) = write_temp_file("records.json", MIXED_BATCH).await;

    let records = load_records(&path).await.unwrap();
    assert_eq!(records.len(), 3);

    let result = process_records(&records, None);
    assert_eq!(result.counts().map(|c| c.total()), Some(3));
}
