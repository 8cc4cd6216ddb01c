use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Factory for creating test timestamps with known dates
pub struct TimestampFactory;

impl TimestampFactory {
    /// Civil (zone-naive) timestamp
    pub fn civil(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    /// Civil midnight
    pub fn civil_date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        Self::civil(year, month, day, 0, 0, 0)
    }

    /// Absolute instant for a specific UTC date/time
    pub fn utc_instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .unwrap()
    }

    /// Instant `minutes` after midnight UTC on the given day
    pub fn utc_minutes_into(year: i32, month: u32, day: u32, minutes: i64) -> DateTime<Utc> {
        Self::utc_instant(year, month, day, 0, 0, 0) + chrono::Duration::minutes(minutes)
    }
}
