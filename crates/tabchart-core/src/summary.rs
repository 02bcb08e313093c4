// File: crates/tabchart-core/src/summary.rs
// Summary: Min/max/average/count statistics over the raw grid, independent of chart mode.

use serde::{Deserialize, Serialize};

use crate::cell::try_sanitize;
use crate::grid::RawGrid;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Data rows (every row after row 0).
    pub category_count: usize,
    /// Value columns in row 0.
    pub year_count: usize,
    /// Cells that produced a number.
    pub point_count: usize,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl Summary {
    pub fn from_grid(grid: &RawGrid) -> Option<Self> { summarize(grid) }
}

/// Statistics over every value cell of rows 1.. (the category column is skipped).
/// Needs a header plus at least one data row; returns `None` otherwise.
/// Empty or non-numeric cells do not count as points; with no points every
/// statistic is 0.
pub fn summarize(grid: &RawGrid) -> Option<Summary> {
    if grid.row_count() < 2 {
        return None;
    }
    let mut sum = 0.0f64;
    let mut count = 0usize;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for row in &grid.rows[1..] {
        for v in row.iter().skip(1).filter_map(try_sanitize) {
            sum += v;
            count += 1;
            max = max.max(v);
            min = min.min(v);
        }
    }

    Some(Summary {
        category_count: grid.row_count() - 1,
        year_count: grid.rows[0].len().saturating_sub(1),
        point_count: count,
        average: if count > 0 { sum / count as f64 } else { 0.0 },
        max: if count > 0 { max } else { 0.0 },
        min: if count > 0 { min } else { 0.0 },
    })
}
