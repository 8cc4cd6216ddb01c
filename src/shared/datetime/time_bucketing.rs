use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::num::NonZeroU32;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Length of one grid step, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval(NonZeroU32);

impl Interval {
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        NonZeroU32::new(minutes).map(Self)
    }

    pub fn minutes(&self) -> u32 {
        self.0.get()
    }

    pub fn as_delta(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.0.get()))
    }
}

/// Walk-back alignment: every timestamp is attributed to the interval that
/// started at or before it, never to a later one.
pub struct WalkBackBucketer {
    step_nanos: i128,
}

impl WalkBackBucketer {
    pub fn new(interval: Interval) -> Self {
        Self {
            step_nanos: i128::from(interval.minutes()) * 60 * NANOS_PER_SEC,
        }
    }

    /// Start of the grid interval containing `ts`.
    pub fn bucket_of(&self, ts: NaiveDateTime) -> NaiveDateTime {
        floor_to_step(ts, self.step_nanos)
    }
}

/// Greatest multiple of `interval` (counted from 0001-01-01T00:00:00) that is `<= ts`.
///
/// Non-positive intervals leave `ts` untouched.
pub fn truncate(ts: NaiveDateTime, interval: TimeDelta) -> NaiveDateTime {
    let step = i128::from(interval.num_seconds()) * NANOS_PER_SEC
        + i128::from(interval.subsec_nanos());
    if step <= 0 {
        return ts;
    }
    floor_to_step(ts, step)
}

fn floor_to_step(ts: NaiveDateTime, step_nanos: i128) -> NaiveDateTime {
    let epoch = tick_epoch();
    // Whole seconds from the epoch; the sub-second part comes from the timestamp itself.
    let secs = (ts.with_nanosecond(0).unwrap_or(ts) - epoch).num_seconds();
    let ticks = i128::from(secs) * NANOS_PER_SEC + i128::from(ts.nanosecond() % 1_000_000_000);

    let floored = ticks.div_euclid(step_nanos) * step_nanos;
    let whole = floored.div_euclid(NANOS_PER_SEC) as i64;
    let frac = floored.rem_euclid(NANOS_PER_SEC) as i64;

    epoch + TimeDelta::seconds(whole) + TimeDelta::nanoseconds(frac)
}

fn tick_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}
