use tracing::{debug, trace};

use crate::engine::ingest::series_map::SeriesMap;
use crate::engine::types::RawSample;
use crate::shared::datetime::{Interval, TimeZoneSelector, WalkBackBucketer};

/// Counters for one ingested batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub stored: usize,
    /// Samples whose (possibly truncated) timestamp was already taken
    pub duplicates: usize,
    /// Samples dropped because the feed carried no timestamp
    pub untimestamped: usize,
}

/// Folds raw samples into a [`SeriesMap`], converting instants to civil time
/// and, when an interval is set, walking them back onto the grid.
pub struct SampleIngestor {
    zone: TimeZoneSelector,
    bucketer: Option<WalkBackBucketer>,
}

impl SampleIngestor {
    /// `interval` is `Some` for dense output, `None` to keep raw timestamps.
    pub fn new(zone: TimeZoneSelector, interval: Option<Interval>) -> Self {
        Self {
            zone,
            bucketer: interval.map(WalkBackBucketer::new),
        }
    }

    pub fn ingest<I>(&self, samples: I, series: &mut SeriesMap) -> IngestStats
    where
        I: IntoIterator<Item = RawSample>,
    {
        let mut stats = IngestStats::default();

        for sample in samples {
            let Some(instant) = sample.timestamp else {
                stats.untimestamped += 1;
                continue;
            };

            let civil = self.zone.to_civil(instant);
            let at = match &self.bucketer {
                Some(bucketer) => bucketer.bucket_of(civil),
                None => civil,
            };

            if series.insert_first(&sample.measurement, at, sample.value) {
                stats.stored += 1;
            } else {
                trace!(
                    target: "mp_influx::ingest",
                    measurement = %sample.measurement,
                    %at,
                    "Dropping later sample for occupied timestamp"
                );
                stats.duplicates += 1;
            }
        }

        debug!(
            target: "mp_influx::ingest",
            stored = stats.stored,
            duplicates = stats.duplicates,
            untimestamped = stats.untimestamped,
            "Ingested batch"
        );
        stats
    }
}
