use super::{OutputTable, SparseTable, Tabulator, TrendBlock};
use crate::engine::ingest::SeriesMap;

/// Lists every observed point per trend, no grid and no type filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseTabulator;

impl Tabulator for SparseTabulator {
    fn tabulate(&self, series: &SeriesMap) -> OutputTable {
        let blocks = series
            .iter()
            .map(|(trend, points)| TrendBlock {
                trend: trend.to_string(),
                points: points.iter().map(|(at, v)| (*at, v.clone())).collect(),
            })
            .collect();

        OutputTable::Sparse(SparseTable { blocks })
    }
}
