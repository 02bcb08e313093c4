// File: crates/tabchart-core/src/cell.rs
// Summary: Tagged cell scalar and the single sanitization boundary (cell -> f64).
// Notes:
// - Sanitization is lossy by contract: anything that does not yield a finite
//   number becomes 0.0. Callers that need to tell "no number" apart from zero
//   use `try_number` instead.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `15.000`, `1.234.567`, `-2.500`: digits grouped in threes by dots.
/// The leading group never starts with 0, so `0.500` stays a decimal.
static DOT_GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[1-9][0-9]{0,2}(\.[0-9]{3})+$").expect("valid grouping regex"));

/// One grid cell as delivered by the table source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Build a text cell; blank input becomes `Empty`.
    pub fn from_str_lossy(raw: &str) -> Self {
        if raw.trim().is_empty() { Cell::Empty } else { Cell::Text(raw.to_string()) }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
        }
    }

    /// Display text used for category labels and header matching.
    pub fn label(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }

    /// Sanitized numeric value, `None` when the cell carries no number.
    pub fn try_number(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => n.is_finite().then_some(*n),
            Cell::Text(s) => parse_lossy(s),
        }
    }

    /// Sanitized numeric value; missing or malformed input yields 0.0.
    pub fn to_number(&self) -> f64 {
        self.try_number().unwrap_or(0.0)
    }
}

impl Default for Cell {
    fn default() -> Self { Cell::Empty }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self { Cell::Number(v) }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self { Cell::Number(f64::from(v)) }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::from_str_lossy(s) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.trim().is_empty() { Cell::Empty } else { Cell::Text(s) }
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self { v.map_or(Cell::Empty, Into::into) }
}

/// Parse a raw text cell into a number, tolerant of currency and formatting noise.
/// Every character other than a digit, `.` or `-` is dropped; unparsable input yields 0.0.
pub fn sanitize_number(raw: &str) -> f64 {
    parse_lossy(raw).unwrap_or(0.0)
}

/// Sanitize any cell; shorthand for [`Cell::to_number`].
pub fn sanitize(cell: &Cell) -> f64 {
    cell.to_number()
}

/// Sanitize any cell without the zero fallback; shorthand for [`Cell::try_number`].
pub fn try_sanitize(cell: &Cell) -> Option<f64> {
    cell.try_number()
}

fn parse_lossy(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let kept: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if kept.is_empty() {
        return None;
    }
    let stripped_noise = kept.len() != trimmed.len();
    let normalized = if is_thousands_grouped(&kept, stripped_noise) { kept.replace('.', "") } else { kept };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A dot is a thousands separator only when the digits are grouped in threes and
/// the text cannot be a plain decimal: several groups, a stripped currency/format
/// prefix, or a group ending in zero (`15.000`). `1.234` on its own stays a decimal.
fn is_thousands_grouped(kept: &str, stripped_noise: bool) -> bool {
    if !DOT_GROUPED.is_match(kept) {
        return false;
    }
    kept.matches('.').count() > 1 || stripped_noise || kept.ends_with('0')
}
