// File: crates/demo/src/main.rs
// Summary: Demo loads a region x year grid (CSV or JSON), runs the chart pipeline and prints the result as JSON.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tabchart_core::{prepare_chart, summarize, ChartMode, ChartRequest, RawGrid};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    path: String,
    mode: ChartMode,
    years: Vec<i32>,
    target: Option<i32>,
    compact: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).with_writer(std::io::stderr).init();

    let args = parse_args(std::env::args().skip(1))?;
    let (grid, path) = load_grid(&args.path)?;
    info!(path = %path.display(), rows = grid.row_count(), columns = grid.column_count(), "loaded grid");
    if grid.row_count() < 2 {
        warn!("grid has no data rows; output will be empty");
    }

    let request = ChartRequest { mode: args.mode, years: args.years, target_year: args.target };
    let chart = prepare_chart(&grid, &request);
    if chart.is_empty() {
        warn!(mode = %chart.mode, "no data for this selection");
    } else {
        info!(
            mode = %chart.mode,
            orientation = ?chart.orientation,
            categories = chart.series.category_labels.len(),
            series = chart.series.len(),
            "prepared chart"
        );
    }

    let out = serde_json::json!({
        "chart": chart,
        "summary": summarize(&grid),
    });
    let text = if args.compact { serde_json::to_string(&out)? } else { serde_json::to_string_pretty(&out)? };
    println!("{text}");
    Ok(())
}

fn usage() -> &'static str {
    "usage: tabchart-demo <grid.csv|grid.json> [bar|line|pie|doughnut] [--years 2022,2023] [--target 2023] [--json]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut path = None;
    let mut mode = None;
    let mut years = Vec::new();
    let mut target = None;
    let mut compact = false;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--years" => {
                let raw = it.next().context("--years needs a comma-separated list")?;
                years = raw
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.trim().parse::<i32>().with_context(|| format!("bad year '{s}'")))
                    .collect::<Result<Vec<i32>>>()?;
            }
            "--target" => {
                let raw = it.next().context("--target needs a year")?;
                target = Some(raw.trim().parse::<i32>().with_context(|| format!("bad target year '{raw}'"))?);
            }
            "--json" => compact = true,
            "-h" | "--help" => anyhow::bail!(usage()),
            _ if path.is_none() => path = Some(arg),
            _ if mode.is_none() => mode = Some(arg.parse::<ChartMode>()?),
            _ => anyhow::bail!("unexpected argument '{arg}'\n{}", usage()),
        }
    }

    Ok(Args {
        path: path.unwrap_or_else(|| "crates/demo/data/penduduk.csv".to_string()),
        mode: mode.unwrap_or_default(),
        years,
        target,
        compact,
    })
}

/// Grid formats the demo can read, keyed by file extension.
#[derive(Clone, Copy)]
enum GridFormat {
    Csv,
    Json,
}

impl GridFormat {
    fn of(path: &Path) -> Self {
        match path.extension().map(|e| e.to_string_lossy().to_lowercase()).as_deref() {
            Some("json") => GridFormat::Json,
            _ => GridFormat::Csv,
        }
    }

    fn other(self) -> Self {
        match self {
            GridFormat::Csv => GridFormat::Json,
            GridFormat::Json => GridFormat::Csv,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            GridFormat::Csv => "csv",
            GridFormat::Json => "json",
        }
    }

    fn load(self, path: &Path) -> Result<RawGrid> {
        let grid = match self {
            GridFormat::Csv => RawGrid::from_csv_path(path)?,
            GridFormat::Json => RawGrid::from_json_path(path)?,
        };
        Ok(grid)
    }
}

/// Load the grid at `raw`; when it is missing, fall back to the same stem in
/// the other format (`data.csv` -> `data.json`). Returns the path actually read.
fn load_grid(raw: &str) -> Result<(RawGrid, PathBuf)> {
    let requested = PathBuf::from(raw);
    let format = GridFormat::of(&requested);
    let (path, format) = if requested.exists() {
        (requested, format)
    } else {
        let fallback = requested.with_extension(format.other().extension());
        if !fallback.exists() {
            anyhow::bail!("file not found: {}", requested.display());
        }
        info!("{} missing; reading {} instead", requested.display(), fallback.display());
        (fallback, format.other())
    };
    let grid = format.load(&path).with_context(|| format!("failed to load grid '{}'", path.display()))?;
    Ok((grid, path))
}
