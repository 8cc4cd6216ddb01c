use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::datetime::Interval;

/// Shape of the rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Regular time grid, one row per interval (`tsv`).
    #[default]
    Dense,
    /// Observed points per trend, no grid (`mp`).
    Sparse,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" | "dense" => Ok(OutputMode::Dense),
            "mp" | "sparse" => Ok(OutputMode::Sparse),
            other => Err(format!("Unknown output mode: '{other}' (expected tsv or mp)")),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Dense => f.write_str("tsv"),
            OutputMode::Sparse => f.write_str("mp"),
        }
    }
}

impl<'de> Deserialize<'de> for OutputMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A validated request: which trends to pull from which bucket, over which
/// civil range, aligned to which grid.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    bucket: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    interval: Option<Interval>,
    trends: Vec<String>,
}

impl QuerySpec {
    /// Returns `None` unless `start < end`. Duplicate trends collapse onto
    /// their first occurrence.
    pub fn new(
        bucket: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        interval: Option<Interval>,
        trends: impl IntoIterator<Item = String>,
    ) -> Option<Self> {
        if start >= end {
            return None;
        }
        let mut distinct: Vec<String> = Vec::new();
        for trend in trends {
            if !distinct.contains(&trend) {
                distinct.push(trend);
            }
        }
        Some(Self {
            bucket: bucket.into(),
            start,
            end,
            interval,
            trends: distinct,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn trends(&self) -> &[String] {
        &self.trends
    }
}
