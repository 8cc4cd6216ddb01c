use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::debug;

use crate::engine::errors::FetchError;
use crate::engine::types::{RawSample, SampleValue};

const TIME_COLUMN: &str = "_time";
const VALUE_COLUMN: &str = "_value";
const MEASUREMENT_COLUMN: &str = "_measurement";
const ERROR_COLUMN: &str = "error";

/// Column positions of one table section of the response.
enum Layout {
    Samples {
        time: Option<usize>,
        value: usize,
        measurement: usize,
    },
    Error {
        message: usize,
    },
}

impl Layout {
    fn from_header(header: &StringRecord) -> Result<Self, FetchError> {
        let position = |name: &str| header.iter().position(|h| h == name);

        if let Some(message) = position(ERROR_COLUMN) {
            return Ok(Layout::Error { message });
        }

        let value = position(VALUE_COLUMN)
            .ok_or_else(|| FetchError::Other(format!("response has no {VALUE_COLUMN} column")))?;
        let measurement = position(MEASUREMENT_COLUMN).ok_or_else(|| {
            FetchError::Other(format!("response has no {MEASUREMENT_COLUMN} column"))
        })?;

        Ok(Layout::Samples {
            time: position(TIME_COLUMN),
            value,
            measurement,
        })
    }
}

/// Decode an annotated CSV query response into raw samples.
///
/// A response may hold several tables, each introduced by its own
/// annotation rows and header. `_value` is typed by the `#datatype`
/// annotation of its column; without one it is kept as text.
pub fn decode_samples<R: Read>(reader: R) -> Result<Vec<RawSample>, FetchError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut datatypes: Option<StringRecord> = None;
    let mut layout: Option<Layout> = None;
    let mut samples = Vec::new();

    for record in csv.records() {
        let record = record?;

        if record.get(0).is_some_and(|first| first.starts_with('#')) {
            if record.get(0) == Some("#datatype") {
                datatypes = Some(record);
            }
            layout = None;
            continue;
        }
        if record.iter().all(str::is_empty) {
            continue;
        }

        let Some(current) = layout.as_ref() else {
            layout = Some(Layout::from_header(&record)?);
            continue;
        };

        match current {
            Layout::Error { message } => {
                let message = record.get(*message).unwrap_or_default();
                return Err(FetchError::Other(format!("query failed: {message}")));
            }
            Layout::Samples {
                time,
                value,
                measurement,
            } => {
                let datatype = datatypes
                    .as_ref()
                    .and_then(|types| types.get(*value))
                    .unwrap_or_default();
                samples.push(RawSample {
                    measurement: record.get(*measurement).unwrap_or_default().to_string(),
                    timestamp: parse_time(time.and_then(|i| record.get(i)))?,
                    value: SampleValue::from_typed(datatype, record.get(*value).unwrap_or_default()),
                });
            }
        }
    }

    debug!(target: "mp_influx::influx", count = samples.len(), "Decoded samples");
    Ok(samples)
}

fn parse_time(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, FetchError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| FetchError::Other(format!("invalid {TIME_COLUMN} '{raw}': {e}"))),
    }
}
