use chrono::{DateTime, SecondsFormat, Utc};

/// Flux query selecting `measurements` from `bucket` within `[start, end)`.
pub fn build_query(
    bucket: &str,
    measurements: &[String],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> String {
    let filter = if measurements.is_empty() {
        "false".to_string()
    } else {
        measurements
            .iter()
            .map(|m| format!("r._measurement == {}", string_literal(m)))
            .collect::<Vec<_>>()
            .join(" or ")
    };

    format!(
        "from(bucket: {}) |> range(start: {}, stop: {}) |> filter(fn: (r) => {})",
        string_literal(bucket),
        start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        end.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        filter
    )
}

/// Quote `raw` as a Flux string literal.
pub fn string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `${` starts interpolation
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
