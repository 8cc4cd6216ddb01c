use std::fmt;

use super::{DenseTable, OutputTable, SparseTable};

const GRID_FORMAT: &str = "%Y-%m-%d %H:%M";
const POINT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

impl fmt::Display for OutputTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTable::Dense(table) => fmt::Display::fmt(table, f),
            OutputTable::Sparse(table) => fmt::Display::fmt(table, f),
        }
    }
}

impl fmt::Display for DenseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DateTime")?;
        for trend in &self.trends {
            write!(f, "\t{trend}")?;
        }
        f.write_str("\n")?;

        for row in &self.rows {
            write!(f, "{}", row.at.format(GRID_FORMAT))?;
            for cell in &row.cells {
                match cell {
                    Some(v) => write!(f, "\t{v}")?,
                    None => f.write_str("\t")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for SparseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{}", block.trend)?;
            for (at, value) in &block.points {
                writeln!(f, "{}\t{}", at.format(POINT_FORMAT), value)?;
            }
        }
        Ok(())
    }
}
