use chrono::NaiveDateTime;

use super::{DenseRow, DenseTable, OutputTable, Tabulator};
use crate::engine::ingest::SeriesMap;
use crate::shared::datetime::Interval;

/// Walks the grid `start, start + interval, ...` while `< end`.
pub struct DenseTabulator {
    start: NaiveDateTime,
    end: NaiveDateTime,
    interval: Interval,
}

impl DenseTabulator {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, interval: Interval) -> Self {
        Self {
            start,
            end,
            interval,
        }
    }

    fn grid(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        let step = self.interval.as_delta();
        std::iter::successors(Some(self.start), move |t| t.checked_add_signed(step))
            .take_while(|t| *t < self.end)
    }
}

impl Tabulator for DenseTabulator {
    fn tabulate(&self, series: &SeriesMap) -> OutputTable {
        let trends: Vec<String> = series.trends().map(str::to_string).collect();

        let rows = self
            .grid()
            .map(|at| DenseRow {
                at,
                cells: series
                    .iter()
                    .map(|(_, points)| points.get(&at).and_then(|v| v.as_float()))
                    .collect(),
            })
            .collect();

        OutputTable::Dense(DenseTable { trends, rows })
    }
}
