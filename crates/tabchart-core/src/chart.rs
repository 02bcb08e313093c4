// File: crates/tabchart-core/src/chart.rs
// Summary: End-to-end pipeline: raw grid + request -> resolved header -> filtered rows -> series -> bounds.

use serde::{Deserialize, Serialize};

use crate::axis::AxisBounds;
use crate::filter::filter_data_rows;
use crate::grid::RawGrid;
use crate::header::{resolve_header_with, Orientation, ResolvedTable};
use crate::series::{build_series_with, SeriesSet};
use crate::types::{ChartMode, TransformOptions};

/// The caller's selection: mode, authoritative year axis and, for proportion
/// modes, the period to show.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub mode: ChartMode,
    /// Year label of each value column by position; empty when not supplied.
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub target_year: Option<i32>,
}

impl ChartRequest {
    pub fn new(mode: ChartMode) -> Self {
        Self { mode, years: Vec::new(), target_year: None }
    }

    pub fn with_years(mut self, years: impl Into<Vec<i32>>) -> Self {
        self.years = years.into();
        self
    }

    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = Some(year);
        self
    }
}

/// Everything an external renderer needs for one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreparedChart {
    pub mode: ChartMode,
    pub orientation: Orientation,
    pub series: SeriesSet,
    /// `None` for proportion modes.
    pub bounds: Option<AxisBounds>,
}

impl PreparedChart {
    pub fn is_empty(&self) -> bool { self.series.is_empty() }
}

pub fn prepare_chart(grid: &RawGrid, request: &ChartRequest) -> PreparedChart {
    prepare_chart_with(grid, request, &TransformOptions::default())
}

/// Pure over its inputs: identical (grid, request, opts) always yields an identical result.
pub fn prepare_chart_with(grid: &RawGrid, request: &ChartRequest, opts: &TransformOptions) -> PreparedChart {
    let resolved = resolve_header_with(grid, opts);
    let table = ResolvedTable { rows: filter_data_rows(&resolved.rows), ..resolved };
    let series = if grid.row_count() < 2 {
        SeriesSet::empty()
    } else {
        build_series_with(&table, &request.years, request.mode, request.target_year, opts)
    };
    let bounds = AxisBounds::for_chart(request.mode, &series, opts);
    tracing::debug!(
        mode = %request.mode,
        categories = series.category_labels.len(),
        series = series.len(),
        "prepared chart"
    );
    PreparedChart { mode: request.mode, orientation: table.orientation, series, bounds }
}
