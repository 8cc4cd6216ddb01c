pub mod batch;
pub mod errors;
pub mod ingest;
pub mod runner;
pub mod source;
pub mod tabulate;
pub mod types;

pub use errors::*;
pub use runner::{Engine, RunOptions};
pub use source::SampleSource;
