pub mod classifier;
pub mod config;
pub mod constants;
pub mod enrichment;
pub mod factorial;
pub mod input;
pub mod kind_aggregation;
pub mod patterns;
pub mod processor;
pub mod result;
pub mod types;

pub use classifier::{classify_number, classify_value, TierClassifier};
pub use config::{OutputConfig, ProcessingConfig, RetryConfig, UnifiedConfig};
pub use enrichment::TierEnricher;
pub use factorial::{FactorialCache, MAX_FACTORIAL_INPUT};
pub use input::{load_records, parse_records, read_lines};
pub use kind_aggregation::{
    aggregate_by_kind, apply_discount, product_entry, user_entry, ProductEntry, RecordKind,
    SideEntry, UserEntry,
};
pub use patterns::{count_long_words, has_priority_keyword, is_valid_email};
pub use processor::{process_records, RecordProcessor};
pub use result::{AggregationResult, TierCounts};
pub use types::{Record, Tier, Value};
