// File: crates/tabchart-core/src/header.rs
// Summary: Header-row resolution with single-swap detection between rows 0 and 1.
// Notes:
// - Only a swap of the first two rows is recognised. Deeper misorderings (header
//   on row 2, several interleaved header rows) pass through untouched and yield a
//   malformed table; this is a known limitation, not something to patch further.

use serde::Serialize;

use crate::cell::Cell;
use crate::grid::{RawGrid, Row};
use crate::types::TransformOptions;
use crate::year::row_is_yearlike;

/// Which branch of the resolver produced the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Row 0 is year-like and row 1 is not.
    HeaderFirst,
    /// Row 1 is year-like and row 0 is not; row 0 was moved into the data.
    SwappedFirstTwo,
    /// Neither or both look like headers; row 0 is taken as the header.
    Ambiguous,
}

/// Grid with the header fixed: `header[0]` labels the category column,
/// `header[1..]` the value columns; each data row's first cell is its category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedTable {
    pub header: Row,
    pub rows: Vec<Row>,
    pub orientation: Orientation,
}

impl ResolvedTable {
    /// Number of value columns (header cells after the category label).
    pub fn value_column_count(&self) -> usize { self.header.len().saturating_sub(1) }

    /// Header cell of column `col`, empty past the end.
    pub fn header_cell(&self, col: usize) -> Cell {
        self.header.get(col).cloned().unwrap_or(Cell::Empty)
    }
}

pub fn resolve_header(grid: &RawGrid) -> ResolvedTable {
    resolve_header_with(grid, &TransformOptions::default())
}

/// Decide which of the first two rows is the header. Never mutates `grid`.
pub fn resolve_header_with(grid: &RawGrid, opts: &TransformOptions) -> ResolvedTable {
    let Some(row0) = grid.rows.first() else {
        return ResolvedTable { header: Vec::new(), rows: Vec::new(), orientation: Orientation::Ambiguous };
    };
    let row0_yearlike = row_is_yearlike(row0, opts);
    let row1_yearlike = grid.rows.get(1).is_some_and(|r| row_is_yearlike(r, opts));

    let table = if row1_yearlike && !row0_yearlike {
        let mut rows = Vec::with_capacity(grid.rows.len() - 1);
        rows.push(row0.clone());
        rows.extend(grid.rows[2..].iter().cloned());
        ResolvedTable { header: grid.rows[1].clone(), rows, orientation: Orientation::SwappedFirstTwo }
    } else {
        let orientation = if row0_yearlike && !row1_yearlike { Orientation::HeaderFirst } else { Orientation::Ambiguous };
        ResolvedTable { header: row0.clone(), rows: grid.rows[1..].to_vec(), orientation }
    };
    tracing::debug!(
        orientation = ?table.orientation,
        row0_yearlike,
        row1_yearlike,
        data_rows = table.rows.len(),
        "resolved header row"
    );
    table
}
