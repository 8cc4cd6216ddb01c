use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Zone in which instants are turned into civil (zone-naive) timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSelector {
    #[default]
    Utc,
    Named(Tz),
}

impl TimeZoneSelector {
    /// Civil wall-clock time of `instant` in this zone. The zone tag is dropped.
    pub fn to_civil(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeZoneSelector::Utc => instant.naive_utc(),
            TimeZoneSelector::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// Absolute instant for a civil timestamp in this zone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earliest instant.
    /// Returns `None` for local times skipped by a DST gap.
    pub fn to_instant(&self, civil: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZoneSelector::Utc => Some(Utc.from_utc_datetime(&civil)),
            TimeZoneSelector::Named(tz) => tz
                .from_local_datetime(&civil)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for TimeZoneSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") {
            return Ok(TimeZoneSelector::Utc);
        }
        s.parse::<Tz>()
            .map(TimeZoneSelector::Named)
            .map_err(|_| format!("Unknown timezone: '{s}'"))
    }
}

impl fmt::Display for TimeZoneSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSelector::Utc => f.write_str("UTC"),
            TimeZoneSelector::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl<'de> Deserialize<'de> for TimeZoneSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
