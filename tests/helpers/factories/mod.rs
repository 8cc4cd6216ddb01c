pub mod query_spec_factory;
pub mod sample_factory;
pub mod series_map_factory;
pub mod timestamp_factory;

pub use query_spec_factory::QuerySpecFactory;
pub use sample_factory::SampleFactory;
pub use series_map_factory::SeriesMapFactory;
pub use timestamp_factory::TimestampFactory;

#[cfg(test)]
mod sample_factory_test;
#[cfg(test)]
mod timestamp_factory_test;
