use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::engine::types::SampleValue;

/// Observed points of one trend, ordered by civil timestamp.
pub type Series = BTreeMap<NaiveDateTime, SampleValue>;

/// Accumulates every trend's points across all fetch batches.
///
/// Trends iterate in lexicographic order. Each timestamp keeps the first
/// value written to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMap {
    series: BTreeMap<String, Series>,
}

impl SeriesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the series for `trend`, creating an empty one on first sight.
    pub fn ensure_trend(&mut self, trend: &str) -> &mut Series {
        self.series.entry(trend.to_string()).or_default()
    }

    /// Insert unless `at` already holds a value. Returns whether it was stored.
    pub fn insert_first(&mut self, trend: &str, at: NaiveDateTime, value: SampleValue) -> bool {
        match self.ensure_trend(trend).entry(at) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, trend: &str, at: &NaiveDateTime) -> Option<&SampleValue> {
        self.series.get(trend).and_then(|s| s.get(at))
    }

    pub fn series(&self, trend: &str) -> Option<&Series> {
        self.series.get(trend)
    }

    pub fn trends(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of stored points over all trends.
    pub fn point_count(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }
}
