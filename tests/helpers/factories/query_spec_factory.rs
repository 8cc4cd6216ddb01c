use super::timestamp_factory::TimestampFactory;
use crate::command::types::QuerySpec;
use crate::shared::datetime::Interval;
use chrono::NaiveDateTime;

pub struct QuerySpecFactory {
    bucket: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    interval_minutes: Option<u32>,
    trends: Vec<String>,
}

impl QuerySpecFactory {
    pub fn new() -> Self {
        Self {
            bucket: "plant".to_string(),
            start: TimestampFactory::civil_date(2024, 1, 1),
            end: TimestampFactory::civil(2024, 1, 1, 1, 0, 0),
            interval_minutes: Some(30),
            trends: vec!["A".to_string()],
        }
    }

    pub fn bucket(mut self, bucket: &str) -> Self {
        self.bucket = bucket.to_string();
        self
    }

    pub fn range(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn interval(mut self, minutes: Option<u32>) -> Self {
        self.interval_minutes = minutes;
        self
    }

    pub fn trends(mut self, trends: &[&str]) -> Self {
        self.trends = trends.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn create(self) -> QuerySpec {
        QuerySpec::new(
            self.bucket,
            self.start,
            self.end,
            self.interval_minutes.and_then(Interval::from_minutes),
            self.trends,
        )
        .unwrap()
    }
}
