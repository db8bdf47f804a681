// File: crates/glimpse-core/src/chart.rs
// Summary: Chart data construction: field resolution, bar-mode rules, line/scatter mapping.

use crate::aggregate::{category_counts, group_mean, histogram};
use crate::coerce::parse_date_millis;
use crate::types::{Cell, ChartKind, ChartPoint, Dataset, HISTOGRAM_BINS};

pub struct ChartOptions {
    pub histogram_bins: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { histogram_bins: HISTOGRAM_BINS }
    }
}

/// Which bar-mode rule produced a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    GroupMean,
    Histogram,
    CategoryCount,
}

/// Requested y if numeric, else the first numeric column.
pub fn resolve_y<'a>(y: Option<&'a str>, numeric: &'a [String]) -> Option<&'a str> {
    y.filter(|y| numeric.iter().any(|c| c == y))
        .or_else(|| numeric.first().map(String::as_str))
}

/// Requested x if it names a column, else the first column.
pub fn resolve_x<'a>(x: Option<&'a str>, dataset: &'a Dataset) -> Option<&'a str> {
    x.filter(|x| dataset.has_column(x))
        .or_else(|| dataset.columns().first().map(String::as_str))
}

/// The bar-mode rule that applies to a resolved (x, y) pair.
pub fn bar_mode(x: &str, y: Option<&str>, numeric: &[String], categorical: &[String]) -> BarMode {
    let is_numeric = |c: &str| numeric.iter().any(|n| n == c);
    match y {
        Some(y) if is_numeric(y) && categorical.iter().any(|c| c == x) => BarMode::GroupMean,
        _ if is_numeric(x) => BarMode::Histogram,
        _ => BarMode::CategoryCount,
    }
}

/// Build chart points with default options. Pure: identical inputs give identical output.
pub fn build_chart_data(
    dataset: &Dataset,
    kind: ChartKind,
    x: Option<&str>,
    y: Option<&str>,
    numeric: &[String],
    categorical: &[String],
) -> Vec<ChartPoint> {
    build_chart_data_with(dataset, kind, x, y, numeric, categorical, &ChartOptions::default())
}

pub fn build_chart_data_with(
    dataset: &Dataset,
    kind: ChartKind,
    x: Option<&str>,
    y: Option<&str>,
    numeric: &[String],
    categorical: &[String],
    opts: &ChartOptions,
) -> Vec<ChartPoint> {
    if dataset.is_empty() {
        return Vec::new();
    }
    let y = resolve_y(y, numeric);
    let Some(x) = resolve_x(x, dataset) else { return Vec::new() };

    match kind {
        ChartKind::Bar => {
            let mode = bar_mode(x, y, numeric, categorical);
            tracing::debug!(?mode, x, y, "building bar chart");
            match (mode, y) {
                (BarMode::GroupMean, Some(y)) => group_mean(dataset, x, y),
                (BarMode::Histogram, _) => histogram(&dataset.finite_values(x), opts.histogram_bins),
                _ => category_counts(dataset, x),
            }
        }
        ChartKind::Line | ChartKind::Scatter => match y {
            Some(y) => point_series(dataset, x, y),
            None => Vec::new(),
        },
    }
}

/// Row-ordered (x, y) pairs; rows without a numeric y are dropped.
/// x is the raw number, a date's epoch milliseconds, or the row index.
fn point_series(dataset: &Dataset, x: &str, y: &str) -> Vec<ChartPoint> {
    let (Some(xi), Some(yi)) = (dataset.column_index(x), dataset.column_index(y)) else {
        return Vec::new();
    };
    dataset
        .records()
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            let yv = r.cells()[yi].as_finite()?;
            let xv = match &r.cells()[xi] {
                Cell::Number(n) => *n,
                Cell::Text(s) => parse_date_millis(s).map(|ms| ms as f64).unwrap_or(i as f64),
                Cell::Empty => i as f64,
            };
            Some(ChartPoint::numeric(xv, yv))
        })
        .collect()
}
