// File: crates/tabchart-core/src/year.rs
// Summary: Year recognition helpers shared by the header resolver, row filter and series builder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cell::Cell;
use crate::types::TransformOptions;

/// Optional leading text, then a standalone four-digit run at the end: `2022`, `Tahun 2022`.
static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:.*[^0-9])?([0-9]{4})$").expect("valid year regex"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));
static BARE_FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid regex"));

/// True when the cell reads as a calendar-year column label.
pub fn is_yearlike(cell: &Cell, opts: &TransformOptions) -> bool {
    match cell {
        Cell::Empty => false,
        Cell::Number(n) => n.fract() == 0.0 && n.abs() < 1e9 && opts.is_year(*n as i64),
        Cell::Text(s) => YEAR_SUFFIX
            .captures(s.trim())
            .and_then(|caps| caps[1].parse::<i64>().ok())
            .is_some_and(|y| opts.is_year(y)),
    }
}

/// True when every label cell of `row` (all but the first) is year-like.
/// A row without label cells is never year-like.
pub fn row_is_yearlike(row: &[Cell], opts: &TransformOptions) -> bool {
    row.len() > 1 && row[1..].iter().all(|c| is_yearlike(c, opts))
}

/// First standalone four-digit run in `text` that falls in the year range.
pub fn extract_year(text: &str, opts: &TransformOptions) -> Option<i32> {
    DIGIT_RUN
        .find_iter(text)
        .filter(|m| m.as_str().len() == 4)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .find(|y| opts.is_year(i64::from(*y)))
}

/// A cell that is nothing but four digits (any value, not range-checked).
pub fn is_bare_four_digit(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => false,
        Cell::Number(n) => n.fract() == 0.0 && (1000.0..=9999.0).contains(n),
        Cell::Text(s) => BARE_FOUR_DIGITS.is_match(s.trim()),
    }
}
