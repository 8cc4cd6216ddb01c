use super::timestamp_factory::TimestampFactory;
use chrono::{Datelike, Timelike};

#[test]
fn test_civil() {
    let ts = TimestampFactory::civil(2024, 1, 15, 12, 30, 45);
    assert_eq!(ts.year(), 2024);
    assert_eq!(ts.month(), 1);
    assert_eq!(ts.day(), 15);
    assert_eq!(ts.hour(), 12);
    assert_eq!(ts.minute(), 30);
    assert_eq!(ts.second(), 45);
}

#[test]
fn test_utc_instant_matches_civil() {
    let instant = TimestampFactory::utc_instant(2024, 1, 15, 12, 30, 45);
    assert_eq!(instant.naive_utc(), TimestampFactory::civil(2024, 1, 15, 12, 30, 45));
}

#[test]
fn test_utc_minutes_into() {
    let instant = TimestampFactory::utc_minutes_into(2024, 1, 1, 29);
    assert_eq!(instant, TimestampFactory::utc_instant(2024, 1, 1, 0, 29, 0));
}
