use super::constants::collections;
use super::kind_aggregation::{ProductEntry, SideEntry, UserEntry};
use super::types::{Record, Tier};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of enriched records per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct TierBuckets {
    high: Vec<Record>,
    medium: Vec<Record>,
    low: Vec<Record>,
}

impl TierBuckets {
    fn get(&self, tier: Tier) -> &[Record] {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut Vec<Record> {
        match tier {
            Tier::High => &mut self.high,
            Tier::Medium => &mut self.medium,
            Tier::Low => &mut self.low,
        }
    }
}

/// Output of a processing run.
///
/// Holds the enriched records per tier in arrival order, the derived user
/// and product collections (absent until the first entry is added) and the
/// per-tier counts attached after the main pass. The empty result returned
/// for empty input has none of these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    buckets: Option<TierBuckets>,
    users: Option<Vec<UserEntry>>,
    products: Option<Vec<ProductEntry>>,
    counts: Option<TierCounts>,
}

impl AggregationResult {
    /// The result for empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result with all three tier buckets present and empty.
    pub fn with_tiers() -> Self {
        Self {
            buckets: Some(TierBuckets::default()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_none() && self.users.is_none() && self.products.is_none()
    }

    pub fn push(&mut self, tier: Tier, record: Record) {
        self.buckets
            .get_or_insert_with(TierBuckets::default)
            .get_mut(tier)
            .push(record);
    }

    pub fn push_side_entry(&mut self, entry: SideEntry) {
        match entry {
            SideEntry::User(user) => self.users.get_or_insert_with(Vec::new).push(user),
            SideEntry::Product(product) => {
                self.products.get_or_insert_with(Vec::new).push(product)
            }
        }
    }

    /// Counts the tier buckets as they currently stand and stores the result.
    pub fn attach_counts(&mut self) -> TierCounts {
        let counts = TierCounts {
            high: self.bucket(Tier::High).len(),
            medium: self.bucket(Tier::Medium).len(),
            low: self.bucket(Tier::Low).len(),
        };
        if self.buckets.is_some() {
            self.counts = Some(counts);
        }
        counts
    }

    /// Enriched records of one tier; empty for an empty result.
    pub fn bucket(&self, tier: Tier) -> &[Record] {
        self.buckets.as_ref().map(|b| b.get(tier)).unwrap_or(&[])
    }

    pub fn users(&self) -> Option<&[UserEntry]> {
        self.users.as_deref()
    }

    pub fn products(&self) -> Option<&[ProductEntry]> {
        self.products.as_deref()
    }

    pub fn counts(&self) -> Option<TierCounts> {
        self.counts
    }

    pub fn count(&self, tier: Tier) -> Option<usize> {
        self.counts.map(|c| c.get(tier))
    }

    /// Iterates `(tier, records)` pairs in high, medium, low order.
    pub fn tiers(&self) -> impl Iterator<Item = (Tier, &[Record])> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.bucket(tier)))
    }
}

/// Serializes as a flat object: `high`, `medium`, `low`, then `users` and
/// `products` when present, then `high_count`, `medium_count`, `low_count`.
impl Serialize for AggregationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(buckets) = &self.buckets {
            for tier in Tier::ALL {
                map.serialize_entry(tier.as_str(), buckets.get(tier))?;
            }
        }
        if let Some(users) = &self.users {
            map.serialize_entry(collections::USERS, users)?;
        }
        if let Some(products) = &self.products {
            map.serialize_entry(collections::PRODUCTS, products)?;
        }
        if let Some(counts) = &self.counts {
            for tier in Tier::ALL {
                let key = format!("{}{}", tier.as_str(), collections::COUNT_SUFFIX);
                map.serialize_entry(&key, &counts.get(tier))?;
            }
        }

        map.end()
    }
}
