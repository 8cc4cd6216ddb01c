use chrono::{DateTime, NaiveDateTime, Utc};
use futures::{StreamExt, stream};
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::{debug, info};

use crate::command::{OutputMode, QuerySpec};
use crate::engine::batch::batch;
use crate::engine::errors::EngineError;
use crate::engine::ingest::{SampleIngestor, SeriesMap};
use crate::engine::source::SampleSource;
use crate::engine::tabulate::{DenseTabulator, OutputTable, SparseTabulator, Tabulator};
use crate::shared::config::EngineConfig;
use crate::shared::datetime::TimeZoneSelector;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub mode: OutputMode,
    pub zone: TimeZoneSelector,
    pub batch_size: NonZeroUsize,
    pub max_concurrent_batches: NonZeroUsize,
}

impl From<&EngineConfig> for RunOptions {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            mode: cfg.output,
            zone: cfg.timezone,
            batch_size: cfg.batch_size,
            max_concurrent_batches: cfg.max_concurrent_batches,
        }
    }
}

/// Fetches every trend batch, merges the samples and tabulates the result.
pub struct Engine<S> {
    source: S,
    options: RunOptions,
}

impl<S: SampleSource> Engine<S> {
    pub fn new(source: S, options: RunOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Full run. Any failing batch fails the run; nothing partial is returned.
    pub async fn run(&self, spec: &QuerySpec) -> Result<OutputTable, EngineError> {
        let series = self.collect(spec).await?;

        let table = match self.options.mode {
            OutputMode::Dense => {
                let interval = spec.interval().ok_or(EngineError::MissingInterval)?;
                DenseTabulator::new(spec.start(), spec.end(), interval).tabulate(&series)
            }
            OutputMode::Sparse => SparseTabulator.tabulate(&series),
        };
        Ok(table)
    }

    /// Fetch and ingest all batches into a fresh [`SeriesMap`].
    ///
    /// Batches may be in flight concurrently but are ingested in request
    /// order, so first-wins resolution matches a sequential run.
    pub async fn collect(&self, spec: &QuerySpec) -> Result<SeriesMap, EngineError> {
        let interval = match self.options.mode {
            OutputMode::Dense => Some(spec.interval().ok_or(EngineError::MissingInterval)?),
            OutputMode::Sparse => None,
        };
        let ingestor = SampleIngestor::new(self.options.zone, interval);

        let start = self.instant(spec.start())?;
        let end = self.instant(spec.end())?;
        let batches = batch(spec.trends(), self.options.batch_size);

        info!(
            target: "mp_influx::engine",
            bucket = spec.bucket(),
            trends = spec.trends().len(),
            batches = batches.len(),
            mode = %self.options.mode,
            zone = %self.options.zone,
            "Starting run"
        );

        let source = &self.source;
        let bucket = spec.bucket();
        let mut fetches = stream::iter(batches.iter().enumerate())
            .map(|(idx, trends)| async move {
                let started = Instant::now();
                let result = source.samples(bucket, trends, start, end).await;
                debug!(
                    target: "mp_influx::engine",
                    batch = idx,
                    trends = ?trends,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    ok = result.is_ok(),
                    "Fetched batch"
                );
                (idx, result)
            })
            .buffered(self.options.max_concurrent_batches.get());

        let mut series = SeriesMap::new();
        while let Some((idx, result)) = fetches.next().await {
            let samples = result.map_err(|source| EngineError::Fetch { batch: idx, source })?;
            ingestor.ingest(samples, &mut series);
        }

        info!(
            target: "mp_influx::engine",
            trends_seen = series.len(),
            points = series.point_count(),
            "Collected samples"
        );
        Ok(series)
    }

    fn instant(&self, civil: NaiveDateTime) -> Result<DateTime<Utc>, EngineError> {
        self.options
            .zone
            .to_instant(civil)
            .ok_or_else(|| EngineError::NonexistentLocalTime {
                at: civil,
                zone: self.options.zone.to_string(),
            })
    }
}
