use super::classifier::TierClassifier;
use super::config::ProcessingConfig;
use super::constants::{fields, DEFAULT_THRESHOLD};
use super::enrichment::TierEnricher;
use super::factorial::FactorialCache;
use super::kind_aggregation::aggregate_by_kind;
use super::result::AggregationResult;
use super::types::Record;
use tracing::{debug, trace};

/// Runs classification, enrichment and side aggregation over a record batch.
///
/// Each processor owns its own factorial memo; create a new processor to
/// start from an empty cache.
#[derive(Debug, Default)]
pub struct RecordProcessor {
    enricher: TierEnricher,
}

impl RecordProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes `records` in order against `threshold`.
    ///
    /// Empty records and records without a `value` field are skipped
    /// entirely: they land in no tier and produce no side entries. Every
    /// other record is enriched into its tier bucket, then passed through
    /// the kind-based side aggregation. Counts are attached at the end.
    pub fn process(&mut self, records: &[Record], threshold: u32) -> AggregationResult {
        let classifier = TierClassifier::new(threshold);
        let mut result = AggregationResult::with_tiers();
        let mut skipped = 0usize;

        for record in records {
            let Some(value) = record.get(fields::VALUE) else {
                skipped += 1;
                continue;
            };

            let tier = classifier.classify(value);
            trace!("record classified as {tier}");
            result.push(tier, self.enricher.enrich(tier, record));

            if let Some(entry) = aggregate_by_kind(record) {
                result.push_side_entry(entry);
            }
        }

        let counts = result.attach_counts();
        debug!(
            "processed {} records (threshold {}): high={} medium={} low={} skipped={}",
            records.len(),
            threshold,
            counts.high,
            counts.medium,
            counts.low,
            skipped
        );

        result
    }

    pub fn factorial_cache(&self) -> &FactorialCache {
        self.enricher.factorial_cache()
    }
}

/// Entry point: processes `records` with the threshold from `config`
/// (default 10). Empty input yields [`AggregationResult::empty`].
pub fn process_records(records: &[Record], config: Option<&ProcessingConfig>) -> AggregationResult {
    if records.is_empty() {
        return AggregationResult::empty();
    }

    let threshold = config.map_or(DEFAULT_THRESHOLD, |c| c.threshold);
    RecordProcessor::new().process(records, threshold)
}
