use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::shared::datetime::TimeZoneSelector;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Utility for parsing user supplied dates into civil timestamps.
pub struct TimeParser;

impl TimeParser {
    /// Parse a date or datetime string into a civil timestamp in `zone`.
    /// Supports RFC3339 (converted into `zone`), `YYYY-MM-DD` (midnight) and
    /// `YYYY-MM-DD[ T]HH:MM[:SS[.fff]]` (taken as already civil).
    pub fn parse_civil(input: &str, zone: &TimeZoneSelector) -> Option<NaiveDateTime> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(zone.to_civil(dt.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }
}
