pub use super::factories::{QuerySpecFactory, SampleFactory, SeriesMapFactory};

pub struct Factory;

impl Factory {
    pub fn sample() -> SampleFactory {
        SampleFactory::new()
    }

    pub fn query_spec() -> QuerySpecFactory {
        QuerySpecFactory::new()
    }

    pub fn series_map() -> SeriesMapFactory {
        SeriesMapFactory::new()
    }
}
