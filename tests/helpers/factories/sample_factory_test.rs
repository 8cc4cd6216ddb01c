use super::sample_factory::SampleFactory;
use super::timestamp_factory::TimestampFactory;
use crate::engine::types::SampleValue;

#[test]
fn test_defaults() {
    let sample = SampleFactory::new().create();
    assert_eq!(sample.measurement, "A");
    assert_eq!(
        sample.timestamp,
        Some(TimestampFactory::utc_instant(2024, 1, 1, 0, 0, 0))
    );
    assert_eq!(sample.value, SampleValue::Float(1.0));
}

#[test]
fn test_create_list_steps_forward() {
    let samples = SampleFactory::new().measurement("B").create_list(3, 10);
    assert_eq!(samples.len(), 3);
    assert_eq!(
        samples[2].timestamp,
        Some(TimestampFactory::utc_instant(2024, 1, 1, 0, 20, 0))
    );
    assert_eq!(samples[2].value, SampleValue::Float(2.0));
    assert!(samples.iter().all(|s| s.measurement == "B"));
}
