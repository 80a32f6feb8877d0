//! Grouping of periods by significance tier.

use std::collections::BTreeMap;

use crate::models::{Period, Significance};

/// Periods grouped by significance tier.
///
/// Only tiers present in the input are materialized, and each bucket keeps
/// the input order of its periods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignificanceBuckets(BTreeMap<Significance, Vec<Period>>);

impl SignificanceBuckets {
    pub fn get(&self, significance: &Significance) -> Option<&[Period]> {
        self.0.get(significance).map(Vec::as_slice)
    }

    /// Number of non-empty tiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Buckets from most to least significant. Unknown tiers come last,
    /// alphabetically by name.
    pub fn in_display_order(&self) -> impl Iterator<Item = (&Significance, &[Period])> {
        self.0
            .iter()
            .rev()
            .map(|(significance, periods)| (significance, periods.as_slice()))
    }
}

/// Group `periods` by significance tier.
///
/// Unknown tier names are not an error: they become their own
/// `Significance::Other` bucket.
pub fn bucket(periods: &[Period]) -> SignificanceBuckets {
    let mut buckets: BTreeMap<Significance, Vec<Period>> = BTreeMap::new();
    for period in periods {
        buckets
            .entry(period.significance.clone())
            .or_default()
            .push(period.clone());
    }
    SignificanceBuckets(buckets)
}
