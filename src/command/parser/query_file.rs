use crate::command::parser::error::ParseError;
use crate::command::types::{OutputMode, QuerySpec};
use crate::shared::datetime::{Interval, TimeZoneSelector};
use crate::shared::time::TimeParser;
use tracing::{debug, warn};

const MIN_LINES: usize = 5;

/// Parse the line-oriented query file:
///
/// ```text
/// Bucket
/// Start Date (YYYY-MM-DD), inclusive
/// End Date (YYYY-MM-DD), exclusive
/// Interval (min)
/// Trend Name 1
/// Trend Name 2
/// ...
/// ```
///
/// Blank trend lines are skipped. The interval line may be left blank for
/// sparse output, which has no grid.
pub fn parse_query_file(
    input: &str,
    mode: OutputMode,
    zone: &TimeZoneSelector,
) -> Result<QuerySpec, ParseError> {
    let lines: Vec<&str> = input.split('\n').collect();
    if lines.len() < MIN_LINES {
        warn!(target: "mp_influx::parse", lines = lines.len(), "Query file too short");
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let bucket = lines[0].trim();
    if bucket.is_empty() {
        return Err(ParseError::MissingBucket);
    }

    let start = parse_date("start", lines[1], zone)?;
    let end = parse_date("end", lines[2], zone)?;
    let interval = parse_interval(lines[3], mode)?;

    let trends = lines[4..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string);

    let spec = QuerySpec::new(bucket, start, end, interval, trends).ok_or_else(|| {
        ParseError::EmptyRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    })?;

    debug!(
        target: "mp_influx::parse",
        bucket = spec.bucket(),
        %start,
        %end,
        interval = ?spec.interval().map(|i| i.minutes()),
        trends = spec.trends().len(),
        "Parsed query file"
    );
    Ok(spec)
}

fn parse_date(
    field: &'static str,
    raw: &str,
    zone: &TimeZoneSelector,
) -> Result<chrono::NaiveDateTime, ParseError> {
    TimeParser::parse_civil(raw, zone).ok_or_else(|| ParseError::InvalidDate {
        field,
        value: raw.trim().to_string(),
    })
}

fn parse_interval(raw: &str, mode: OutputMode) -> Result<Option<Interval>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return match mode {
            OutputMode::Sparse => Ok(None),
            OutputMode::Dense => Err(ParseError::MissingInterval),
        };
    }
    raw.parse::<u32>()
        .ok()
        .and_then(Interval::from_minutes)
        .map(Some)
        .ok_or_else(|| ParseError::InvalidInterval(raw.to_string()))
}
