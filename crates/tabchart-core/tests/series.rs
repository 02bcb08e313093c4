// File: crates/tabchart-core/tests/series.rs
// Purpose: Series building for comparison/trend and proportion modes.

use tabchart_core::{build_series, filter_data_rows, resolve_header, ChartMode, RawGrid, ResolvedTable, Series};

fn regions() -> RawGrid {
    RawGrid::from_rows(vec![
        vec!["Region", "2022", "2023"],
        vec!["A", "10", "20"],
        vec!["B", "5", "Rp 15.000"],
    ])
}

fn resolved(grid: &RawGrid) -> ResolvedTable {
    let t = resolve_header(grid);
    ResolvedTable { rows: filter_data_rows(&t.rows), ..t }
}

#[test]
fn trend_emits_one_series_per_year_column() {
    let t = resolved(&regions());
    let set = build_series(&t, &[2022, 2023], ChartMode::Line, None);
    assert_eq!(set.category_labels, ["A", "B"]);
    assert_eq!(set.series, vec![
        Series::new("2022", vec![10.0, 5.0]),
        Series::new("2023", vec![20.0, 15000.0]),
    ]);
}

#[test]
fn year_axis_overrides_header_text() {
    let t = resolved(&regions());
    let set = build_series(&t, &[2030, 2031], ChartMode::Bar, None);
    let names: Vec<&str> = set.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(names, ["2030", "2031"]);
}

#[test]
fn labels_fall_back_to_header_year_then_column_index() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "Jumlah 2021", "Persen", "2023*"],
        vec!["A", "1", "2", "3"],
    ]);
    let t = resolved(&grid);
    // Short year axis: only column 1 is covered.
    let set = build_series(&t, &[2020], ChartMode::Bar, None);
    let names: Vec<&str> = set.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(names, ["2020", "Column 2", "2023"]);

    let set = build_series(&t, &[], ChartMode::Bar, None);
    let names: Vec<&str> = set.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(names, ["2021", "Column 2", "2023"]);
}

#[test]
fn ragged_rows_read_missing_cells_as_zero() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "2022", "2023"],
        vec!["A", "10"],
        vec!["B", "5", "6", "999"],
    ]);
    let set = build_series(&resolved(&grid), &[2022, 2023], ChartMode::Line, None);
    assert_eq!(set.series.len(), 2);
    assert_eq!(set.series[1].values, vec![0.0, 6.0]);
}

#[test]
fn trend_keeps_total_rows() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "2022"],
        vec!["A", "10"],
        vec!["Total", "10"],
    ]);
    let set = build_series(&resolved(&grid), &[2022], ChartMode::Line, None);
    assert_eq!(set.category_labels, ["A", "Total"]);
}

#[test]
fn proportion_uses_target_year_position() {
    let t = resolved(&regions());
    let set = build_series(&t, &[2022, 2023], ChartMode::Pie, Some(2023));
    assert_eq!(set.series.len(), 1);
    assert!(set.series[0].label.contains("2023"));
    assert_eq!(set.series[0].values, vec![20.0, 15000.0]);
    assert_eq!(set.category_labels, ["A", "B"]);
}

#[test]
fn proportion_position_ignores_header_text() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "X", "Y"],
        vec!["A", "1", "100"],
    ]);
    let set = build_series(&resolved(&grid), &[2022, 2023], ChartMode::Doughnut, Some(2022));
    assert_eq!(set.series[0].values, vec![1.0]);
}

#[test]
fn proportion_unknown_target_is_empty() {
    let t = resolved(&regions());
    let set = build_series(&t, &[2022, 2023], ChartMode::Pie, Some(1999));
    assert!(set.series.is_empty());
    assert!(set.category_labels.is_empty());
}

#[test]
fn proportion_without_axis_matches_header_text() {
    let t = resolved(&regions());
    let set = build_series(&t, &[], ChartMode::Pie, Some(2022));
    assert_eq!(set.series[0].label, "2022");
    assert_eq!(set.series[0].values, vec![10.0, 5.0]);

    let none = build_series(&t, &[], ChartMode::Pie, Some(2024));
    assert!(none.is_empty());
}

#[test]
fn proportion_without_target_uses_latest_period() {
    let t = resolved(&regions());
    let with_axis = build_series(&t, &[2022, 2023], ChartMode::Pie, None);
    assert_eq!(with_axis.series[0].label, "2023");
    let from_header = build_series(&t, &[], ChartMode::Pie, None);
    assert_eq!(from_header.series[0].label, "2023");
}

#[test]
fn proportion_excludes_totals_and_non_positive() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "2022", "2023"],
        vec!["A", "10", "20"],
        vec!["Total", "15", "35"],
        vec!["Sub-TOTAL east", "1", "1"],
        vec!["C", "3", "0"],
        vec!["D", "3", "-4"],
        vec!["B", "5", "Rp 15.000"],
    ]);
    let set = build_series(&resolved(&grid), &[2022, 2023], ChartMode::Pie, Some(2023));
    assert_eq!(set.category_labels, ["A", "B"]);
    assert_eq!(set.series[0].values, vec![20.0, 15000.0]);
}

#[test]
fn proportion_all_non_positive_is_empty() {
    let grid = RawGrid::from_rows(vec![
        vec!["Region", "2022"],
        vec!["A", "0"],
        vec!["B", "-"],
    ]);
    let set = build_series(&resolved(&grid), &[2022], ChartMode::Pie, Some(2022));
    assert!(set.is_empty());
    assert!(set.category_labels.is_empty());
}

#[test]
fn no_data_rows_is_empty() {
    let grid = RawGrid::from_rows(vec![vec!["Region", "2022"]]);
    let set = build_series(&resolved(&grid), &[2022], ChartMode::Line, None);
    assert!(set.is_empty());
    assert!(set.category_labels.is_empty());
}
