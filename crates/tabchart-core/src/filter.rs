// File: crates/tabchart-core/src/filter.rs
// Summary: Drops stray header/separator rows that leaked into the data region.

use crate::cell::Cell;
use crate::grid::Row;
use crate::year::is_bare_four_digit;

/// Keep rows whose first cell is a real category label. Order is preserved.
pub fn filter_data_rows(rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .filter(|row| {
            let stray = is_stray_row(row);
            if stray {
                tracing::trace!(label = %row.first().map(Cell::label).unwrap_or_default(), "dropping stray row");
            }
            !stray
        })
        .cloned()
        .collect()
}

/// First cell empty, a bare four-digit number, or mentioning "tahun"/"year".
pub fn is_stray_row(row: &[Cell]) -> bool {
    let Some(first) = row.first() else { return true; };
    if first.is_empty() || is_bare_four_digit(first) {
        return true;
    }
    let label = first.label().to_lowercase();
    label.contains("tahun") || label.contains("year")
}
