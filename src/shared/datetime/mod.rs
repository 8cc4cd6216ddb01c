pub mod time;
pub mod time_bucketing;

pub use time::TimeZoneSelector;
pub use time_bucketing::{Interval, WalkBackBucketer, truncate};
