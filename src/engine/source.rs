use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::engine::errors::FetchError;
use crate::engine::types::RawSample;

/// Remote store that can return the raw samples of a few measurements.
///
/// Implementations filter by measurement name and range server side; the
/// engine does not filter again.
#[async_trait]
pub trait SampleSource: Send + Sync {
    async fn samples(
        &self,
        bucket: &str,
        measurements: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawSample>, FetchError>;
}
