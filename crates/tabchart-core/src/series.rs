// File: crates/tabchart-core/src/series.rs
// Summary: Series model and the builder for comparison/trend and proportion modes.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Row;
use crate::header::ResolvedTable;
use crate::types::{ChartMode, TransformOptions};
use crate::year::extract_year;

/// One named run of values bound to the chart categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }
}

/// Chart-ready output: category labels plus the series drawn against them.
/// Contract: every series holds exactly `category_labels.len()` values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub category_labels: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// No labels, no series; the "nothing to draw" result.
    pub fn empty() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn len(&self) -> usize { self.series.len() }

    /// Every value of every series, in series then category order.
    pub fn all_values(&self) -> Vec<f64> {
        self.series.iter().flat_map(|s| s.values.iter().copied()).collect()
    }
}

pub fn build_series(table: &ResolvedTable, year_axis: &[i32], mode: ChartMode, target_year: Option<i32>) -> SeriesSet {
    build_series_with(table, year_axis, mode, target_year, &TransformOptions::default())
}

/// Build the series for `mode` from already-resolved (and usually filtered) rows.
/// An empty `year_axis` means none was supplied.
pub fn build_series_with(
    table: &ResolvedTable,
    year_axis: &[i32],
    mode: ChartMode,
    target_year: Option<i32>,
    opts: &TransformOptions,
) -> SeriesSet {
    if table.rows.is_empty() {
        return SeriesSet::empty();
    }
    if mode.is_proportion() {
        build_proportion(table, year_axis, target_year, opts)
    } else {
        build_columns(table, year_axis, opts)
    }
}

/// Label for value column `col` (1-based): year axis first, then a year in the
/// header text, then `Column {col}`.
pub fn column_label(table: &ResolvedTable, year_axis: &[i32], col: usize, opts: &TransformOptions) -> String {
    if let Some(year) = year_axis.get(col - 1) {
        return year.to_string();
    }
    match extract_year(&table.header_cell(col).label(), opts) {
        Some(year) => year.to_string(),
        None => format!("Column {col}"),
    }
}

fn build_columns(table: &ResolvedTable, year_axis: &[i32], opts: &TransformOptions) -> SeriesSet {
    let category_labels = table.rows.iter().map(row_label).collect();
    let series = (1..table.header.len())
        .map(|col| {
            let values = table.rows.iter().map(|r| cell_value(r, col)).collect();
            Series::new(column_label(table, year_axis, col, opts), values)
        })
        .collect();
    SeriesSet { category_labels, series }
}

fn build_proportion(table: &ResolvedTable, year_axis: &[i32], target_year: Option<i32>, opts: &TransformOptions) -> SeriesSet {
    let Some((col, year)) = resolve_target_column(table, year_axis, target_year, opts) else {
        tracing::debug!(?target_year, axis_len = year_axis.len(), "target year not resolvable; empty proportion");
        return SeriesSet::empty();
    };

    let (category_labels, values): (Vec<String>, Vec<f64>) = table
        .rows
        .iter()
        .map(|r| (row_label(r), cell_value(r, col)))
        .filter(|(label, value)| *value > 0.0 && !label.to_lowercase().contains("total"))
        .unzip();

    if values.is_empty() {
        return SeriesSet::empty();
    }
    SeriesSet { category_labels, series: vec![Series::new(year.to_string(), values)] }
}

/// Map the target year onto a value column. With a year axis the position in
/// the axis decides (`1 + index`) regardless of header text; without one the
/// header text is searched. No target means the latest period available.
pub fn resolve_target_column(
    table: &ResolvedTable,
    year_axis: &[i32],
    target_year: Option<i32>,
    opts: &TransformOptions,
) -> Option<(usize, i32)> {
    if !year_axis.is_empty() {
        let target = target_year.or_else(|| year_axis.last().copied())?;
        return year_axis.iter().position(|&y| y == target).map(|pos| (pos + 1, target));
    }
    let mut header_years = (1..table.header.len())
        .filter_map(|col| extract_year(&table.header[col].label(), opts).map(|y| (col, y)));
    match target_year {
        Some(target) => header_years.find(|&(_, y)| y == target),
        None => header_years.last(),
    }
}

fn row_label(row: &Row) -> String {
    row.first().map(Cell::label).unwrap_or_default()
}

fn cell_value(row: &Row, col: usize) -> f64 {
    row.get(col).map(Cell::to_number).unwrap_or(0.0)
}
