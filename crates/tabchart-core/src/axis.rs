// File: crates/tabchart-core/src/axis.rs
// Summary: Value-axis bounds that always keep the zero line in view.

use serde::{Deserialize, Serialize};

use crate::series::SeriesSet;
use crate::types::{ChartMode, TransformOptions};

/// Suggested value range for comparison/trend charts.
/// Contract: `min <= 0.0 <= max` and `include_zero` is always true.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub include_zero: bool,
    /// No data was seen: the renderer should auto-scale, anchored at zero.
    pub auto_scale: bool,
}

impl AxisBounds {
    /// Bounds for an empty value set.
    pub const fn auto() -> Self {
        Self { min: 0.0, max: 0.0, include_zero: true, auto_scale: true }
    }

    /// Bounds for a built series set, `None` for proportion modes (no value axis).
    pub fn for_chart(mode: ChartMode, set: &SeriesSet, opts: &TransformOptions) -> Option<Self> {
        if mode.is_proportion() {
            return None;
        }
        Some(compute_bounds_with(&set.all_values(), opts))
    }
}

pub fn compute_bounds(values: &[f64]) -> AxisBounds {
    compute_bounds_with(values, &TransformOptions::default())
}

/// Pad the data range by `padding_ratio` (or `flat_padding` when flat) on the
/// side(s) away from zero; the side that does not cross zero is pinned at 0.
pub fn compute_bounds_with(values: &[f64], opts: &TransformOptions) -> AxisBounds {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let Some((lo, hi)) = finite.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    }) else {
        return AxisBounds::auto();
    };

    let range = (hi - lo).abs();
    let padding = if range > 0.0 { range * opts.padding_ratio } else { opts.flat_padding };
    let min = if lo < 0.0 { lo - padding } else { 0.0 };
    let max = if hi > 0.0 { hi + padding } else { 0.0 };
    AxisBounds { min, max, include_zero: true, auto_scale: false }
}
