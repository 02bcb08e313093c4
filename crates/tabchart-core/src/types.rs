// File: crates/tabchart-core/src/types.rs
// Summary: Shared types and constants (chart modes, year range, bounds padding, options).

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseChartModeError;

/// Earliest value accepted as a calendar year in header cells.
pub const YEAR_MIN: i32 = 1900;
/// Latest value accepted as a calendar year in header cells.
pub const YEAR_MAX: i32 = 2100;
/// Fraction of the value range added above/below the data on the value axis.
pub const DEFAULT_PADDING_RATIO: f64 = 0.15;
/// Padding used when every value is identical (zero range).
pub const DEFAULT_FLAT_PADDING: f64 = 1.0;

/// Presentation mode requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Categorical comparison: one bar group per category, one bar per year.
    Bar,
    /// Trend over time: one line per year column.
    Line,
    /// Single-period proportion drawn as a pie.
    Pie,
    /// Single-period proportion drawn as a doughnut.
    Doughnut,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [ChartMode::Bar, ChartMode::Line, ChartMode::Pie, ChartMode::Doughnut];

    /// Pie and doughnut show one period as parts of a whole.
    pub const fn is_proportion(self) -> bool {
        matches!(self, ChartMode::Pie | ChartMode::Doughnut)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartMode::Bar => "bar",
            ChartMode::Line => "line",
            ChartMode::Pie => "pie",
            ChartMode::Doughnut => "doughnut",
        }
    }
}

impl Default for ChartMode {
    fn default() -> Self { ChartMode::Bar }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = ParseChartModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" | "comparison" => Ok(ChartMode::Bar),
            "line" | "trend" => Ok(ChartMode::Line),
            "pie" => Ok(ChartMode::Pie),
            "doughnut" | "donut" => Ok(ChartMode::Doughnut),
            _ => Err(ParseChartModeError(s.to_string())),
        }
    }
}

/// Tunables for the transformation heuristics.
/// Contract: `padding_ratio` and `flat_padding` are non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformOptions {
    /// Values accepted as calendar years when reading header text.
    pub year_range: RangeInclusive<i32>,
    /// Multiplier on the value range used as axis padding.
    pub padding_ratio: f64,
    /// Axis padding when the value range is zero.
    pub flat_padding: f64,
}

impl TransformOptions {
    pub fn is_year(&self, n: i64) -> bool {
        n >= i64::from(*self.year_range.start()) && n <= i64::from(*self.year_range.end())
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            year_range: YEAR_MIN..=YEAR_MAX,
            padding_ratio: DEFAULT_PADDING_RATIO,
            flat_padding: DEFAULT_FLAT_PADDING,
        }
    }
}
