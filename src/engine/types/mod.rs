use chrono::{DateTime, Utc};
use std::fmt;

/// Payload of a single sample as decoded from the store.
///
/// Only `Float` counts as numeric for grid output; every other variant is
/// kept for the sparse listing.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Float(f64),
    Integer(i64),
    UnsignedInteger(u64),
    Boolean(bool),
    Text(String),
}

impl SampleValue {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SampleValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Decode a raw field using the store's column datatype name.
    /// Values that do not parse as their declared type are kept as text.
    pub fn from_typed(datatype: &str, raw: &str) -> Self {
        let parsed = match datatype {
            "double" => raw.parse().ok().map(SampleValue::Float),
            "long" => raw.parse().ok().map(SampleValue::Integer),
            "unsignedLong" => raw.parse().ok().map(SampleValue::UnsignedInteger),
            "boolean" => match raw {
                "true" => Some(SampleValue::Boolean(true)),
                "false" => Some(SampleValue::Boolean(false)),
                _ => None,
            },
            _ => None,
        };
        parsed.unwrap_or_else(|| SampleValue::Text(raw.to_string()))
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Float(v) => write!(f, "{v}"),
            SampleValue::Integer(v) => write!(f, "{v}"),
            SampleValue::UnsignedInteger(v) => write!(f, "{v}"),
            SampleValue::Boolean(v) => write!(f, "{v}"),
            SampleValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        SampleValue::Float(value)
    }
}

impl From<i64> for SampleValue {
    fn from(value: i64) -> Self {
        SampleValue::Integer(value)
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::Text(value.to_string())
    }
}

/// One record from the store. Consumed by ingestion and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub measurement: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub value: SampleValue,
}
