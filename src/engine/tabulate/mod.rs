pub mod dense;
pub mod render;
pub mod sparse;

pub use dense::DenseTabulator;
pub use sparse::SparseTabulator;

use chrono::NaiveDateTime;

use crate::engine::ingest::SeriesMap;
use crate::engine::types::SampleValue;

/// Turns a fully populated [`SeriesMap`] into a table.
pub trait Tabulator {
    fn tabulate(&self, series: &SeriesMap) -> OutputTable;
}

/// Rendered result; `Display` produces the final text.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTable {
    Dense(DenseTable),
    Sparse(SparseTable),
}

/// One column per trend, one row per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTable {
    pub trends: Vec<String>,
    pub rows: Vec<DenseRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseRow {
    pub at: NaiveDateTime,
    /// Aligned with `DenseTable::trends`; `None` renders blank.
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparseTable {
    pub blocks: Vec<TrendBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendBlock {
    pub trend: String,
    pub points: Vec<(NaiveDateTime, SampleValue)>,
}
