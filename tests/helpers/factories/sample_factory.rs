use super::timestamp_factory::TimestampFactory;
use crate::engine::types::{RawSample, SampleValue};
use chrono::{DateTime, Utc};

pub struct SampleFactory {
    measurement: String,
    timestamp: Option<DateTime<Utc>>,
    value: SampleValue,
}

impl SampleFactory {
    pub fn new() -> Self {
        Self {
            measurement: "A".to_string(),
            timestamp: Some(TimestampFactory::utc_instant(2024, 1, 1, 0, 0, 0)),
            value: SampleValue::Float(1.0),
        }
    }

    pub fn measurement(mut self, name: &str) -> Self {
        self.measurement = name.to_string();
        self
    }

    pub fn at(mut self, instant: DateTime<Utc>) -> Self {
        self.timestamp = Some(instant);
        self
    }

    /// Shortcut for an instant on 2024-01-01 UTC
    pub fn at_hm(self, hour: u32, min: u32) -> Self {
        self.at(TimestampFactory::utc_instant(2024, 1, 1, hour, min, 0))
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    pub fn value(mut self, value: impl Into<SampleValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn create(self) -> RawSample {
        RawSample {
            measurement: self.measurement,
            timestamp: self.timestamp,
            value: self.value,
        }
    }

    /// `count` samples one `step_minutes` apart starting at the configured instant,
    /// valued 0.0, 1.0, 2.0, ...
    pub fn create_list(self, count: usize, step_minutes: i64) -> Vec<RawSample> {
        let start = self.timestamp;
        (0..count)
            .map(|i| RawSample {
                measurement: self.measurement.clone(),
                timestamp: start.map(|t| t + chrono::Duration::minutes(step_minutes * i as i64)),
                value: SampleValue::Float(i as f64),
            })
            .collect()
    }
}
