pub mod error;
pub mod query_file;

pub use error::ParseError;
pub use query_file::parse_query_file;
