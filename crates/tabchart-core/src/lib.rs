// File: crates/tabchart-core/src/lib.rs
// Summary: Core library entry point; exports the table-to-series transformation engine.
//
// The engine reads a loosely-typed region x year grid and produces a chart-ready
// series set for bar, line, pie and doughnut charts. Every operation degrades
// gracefully: malformed cells become 0, unresolvable requests become an empty
// `SeriesSet`, and nothing here returns an error. Only loading a grid from an
// external source (`RawGrid::from_csv_reader`, `RawGrid::from_json_str`) and
// parsing a mode name are fallible.

pub mod axis;
pub mod cell;
pub mod chart;
pub mod error;
pub mod filter;
pub mod grid;
pub mod header;
pub mod series;
pub mod summary;
pub mod types;
pub mod year;

pub use axis::{compute_bounds, compute_bounds_with, AxisBounds};
pub use cell::{sanitize, sanitize_number, try_sanitize, Cell};
pub use chart::{prepare_chart, prepare_chart_with, ChartRequest, PreparedChart};
pub use error::{GridError, ParseChartModeError};
pub use filter::filter_data_rows;
pub use grid::{RawGrid, Row};
pub use header::{resolve_header, resolve_header_with, Orientation, ResolvedTable};
pub use series::{build_series, build_series_with, Series, SeriesSet};
pub use summary::{summarize, Summary};
pub use types::{ChartMode, TransformOptions};
