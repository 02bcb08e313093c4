// File: crates/tabchart-core/src/grid.rs
// Summary: Raw row-major grid of untyped cells, plus CSV/JSON loaders.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::GridError;

/// One grid row; the first cell is conventionally the category label.
pub type Row = Vec<Cell>;

static EMPTY_CELL: Cell = Cell::Empty;

/// Tabular input before any structural interpretation.
/// Rows may be ragged; reads past the end of a row see `Cell::Empty`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawGrid {
    pub rows: Vec<Row>,
}

impl RawGrid {
    pub fn new(rows: Vec<Row>) -> Self { Self { rows } }

    /// Build from any nested iterable of cell-convertible values.
    pub fn from_rows<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self { rows: rows.into_iter().map(|r| r.into_iter().map(Into::into).collect()).collect() }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Widest row length.
    pub fn column_count(&self) -> usize { self.rows.iter().map(Vec::len).max().unwrap_or(0) }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Cell at (row, col); out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY_CELL)
    }

    /// Read every record as a row. No header interpretation happens here.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, GridError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(Cell::from_str_lossy).collect());
        }
        tracing::debug!(rows = rows.len(), "loaded CSV grid");
        Ok(Self { rows })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Parse a JSON array of arrays of scalars (`null`, numbers, strings).
    pub fn from_json_str(s: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}
