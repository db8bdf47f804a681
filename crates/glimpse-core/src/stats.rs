// File: crates/glimpse-core/src/stats.rs
// Summary: Summary statistics (count/mean/min/max/population std) for one numeric column.

use crate::types::{Dataset, Statistics};

/// Summarize `y` if it is numeric, else the first numeric column.
/// `None` when there is no numeric column or it holds no finite values.
pub fn compute_statistics(dataset: &Dataset, numeric: &[String], y: Option<&str>) -> Option<Statistics> {
    let column = match y {
        Some(y) if numeric.iter().any(|c| c == y) => y,
        _ => numeric.first()?.as_str(),
    };
    let values = dataset.finite_values(column);
    summarize(column, &values)
}

/// Population variance (divisor = count); std is its square root.
pub fn summarize(column: &str, values: &[f64]) -> Option<Statistics> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    Some(Statistics { column: column.to_string(), count, mean, min, max, std: variance.sqrt() })
}
