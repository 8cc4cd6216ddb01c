use super::flux::{build_query, string_literal};
use crate::test_helpers::factories::TimestampFactory;

#[test]
fn builds_or_filter_over_batch() {
    let query = build_query(
        "plant",
        &["A".to_string(), "B".to_string()],
        TimestampFactory::utc_instant(2024, 1, 1, 0, 0, 0),
        TimestampFactory::utc_instant(2024, 1, 2, 0, 0, 0),
    );

    assert_eq!(
        query,
        "from(bucket: \"plant\") |> range(start: 2024-01-01T00:00:00Z, stop: 2024-01-02T00:00:00Z) \
         |> filter(fn: (r) => r._measurement == \"A\" or r._measurement == \"B\")"
    );
}

#[test]
fn empty_batch_matches_nothing() {
    let query = build_query(
        "plant",
        &[],
        TimestampFactory::utc_instant(2024, 1, 1, 0, 0, 0),
        TimestampFactory::utc_instant(2024, 1, 2, 0, 0, 0),
    );
    assert!(query.ends_with("filter(fn: (r) => false)"));
}

#[test]
fn escapes_string_literals() {
    assert_eq!(string_literal("plain"), "\"plain\"");
    assert_eq!(string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(string_literal("C:\\temp"), "\"C:\\\\temp\"");
    assert_eq!(string_literal("cost ${x}"), "\"cost \\${x}\"");
    assert_eq!(string_literal("$5"), "\"$5\"");
}
