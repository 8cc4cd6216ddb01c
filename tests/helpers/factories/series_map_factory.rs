use crate::engine::ingest::SeriesMap;
use crate::engine::types::SampleValue;
use chrono::NaiveDateTime;

/// Builds a populated [`SeriesMap`] directly, bypassing ingestion.
pub struct SeriesMapFactory {
    map: SeriesMap,
}

impl SeriesMapFactory {
    pub fn new() -> Self {
        Self {
            map: SeriesMap::new(),
        }
    }

    /// Register a trend with no points
    pub fn empty_trend(mut self, trend: &str) -> Self {
        self.map.ensure_trend(trend);
        self
    }

    pub fn point(mut self, trend: &str, at: NaiveDateTime, value: impl Into<SampleValue>) -> Self {
        self.map.insert_first(trend, at, value.into());
        self
    }

    pub fn create(self) -> SeriesMap {
        self.map
    }
}
