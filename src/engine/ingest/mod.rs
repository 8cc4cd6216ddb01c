pub mod ingestor;
pub mod series_map;

pub use ingestor::{IngestStats, SampleIngestor};
pub use series_map::{Series, SeriesMap};
