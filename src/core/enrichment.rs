use super::constants::{derived, fields};
use super::factorial::FactorialCache;
use super::patterns::{count_long_words, has_priority_keyword};
use super::types::{Record, Tier, Value};
use std::collections::BTreeSet;

/// Produces enriched copies of records according to their tier.
///
/// Input records are never modified. The enricher owns the factorial memo
/// used by high-tier enrichment, so one enricher serves one processing run.
#[derive(Debug, Default)]
pub struct TierEnricher {
    factorials: FactorialCache,
}

impl TierEnricher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enrich(&mut self, tier: Tier, record: &Record) -> Record {
        match tier {
            Tier::High => self.enrich_high(record),
            Tier::Medium => self.enrich_medium(record),
            Tier::Low => self.enrich_low(record),
        }
    }

    /// Tag statistics, description analysis and a bounded factorial of `value`.
    pub fn enrich_high(&mut self, record: &Record) -> Record {
        let mut result = record.clone();

        if let Some(tags) = record.get(fields::TAGS).and_then(Value::as_list) {
            result.insert(derived::TAG_COUNT, tags.len());
            result.insert(derived::HAS_PRIORITY, tags.iter().any(tag_has_priority));

            let categories: BTreeSet<String> = tags
                .iter()
                .filter_map(Value::as_map)
                .filter_map(|tag| tag.get(fields::CATEGORY))
                .map(Value::render)
                .collect();
            if !categories.is_empty() {
                result.insert(derived::CATEGORIES, categories);
            }
        }

        if let Some(description) = record.get(fields::DESCRIPTION).and_then(Value::as_str) {
            result.insert(derived::LONG_WORD_COUNT, count_long_words(description));
            if has_priority_keyword(description) {
                result.insert(derived::HAS_PRIORITY_KEYWORDS, true);
            }
        }

        let bounded = record
            .get(fields::VALUE)
            .and_then(Value::as_number)
            .and_then(FactorialCache::bounded_input);
        if let Some(n) = bounded {
            result.insert(derived::FACTORIAL, self.factorials.factorial(n));
        }

        result
    }

    /// Normalizes `metadata` to upper-cased keys with stringified values.
    pub fn enrich_medium(&self, record: &Record) -> Record {
        let mut result = record.clone();

        if let Some(metadata) = record.get(fields::METADATA).and_then(Value::as_map) {
            let normalized: Record = metadata
                .iter()
                .map(|(key, value)| (key.to_uppercase(), value.render()))
                .collect();
            result.insert(fields::METADATA, normalized);

            let has_nested = metadata
                .iter()
                .any(|(_, value)| value.as_map().is_some_and(|m| m.contains(fields::NESTED)));
            if has_nested {
                result.insert(derived::HAS_NESTED, true);
            }
        }

        result
    }

    pub fn enrich_low(&self, record: &Record) -> Record {
        let mut result = record.clone();
        result.insert(derived::PROCESSED, true);
        result
    }

    pub fn factorial_cache(&self) -> &FactorialCache {
        &self.factorials
    }
}

fn tag_has_priority(tag: &Value) -> bool {
    tag.as_map()
        .and_then(|t| t.get(fields::PRIORITY))
        .is_some_and(Value::is_truthy)
}
