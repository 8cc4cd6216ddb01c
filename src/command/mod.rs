pub mod parser;
pub mod types;

pub use parser::{ParseError, parse_query_file};
pub use types::{OutputMode, QuerySpec};
