// File: crates/glimpse-core/src/aggregate.rs
// Summary: Bar-mode aggregations (group mean, histogram bins, category counts).

use std::collections::BTreeMap;

use crate::grid::{bin_index, bin_lower_edges, bin_width, edge_label};
use crate::types::{ChartPoint, Dataset};

/// Mean of `y` per distinct string form of `x`, keys ascending.
/// Rows whose `y` is not a finite number still create their group but do not
/// count toward its mean; a group with no numeric `y` reports 0.
pub fn group_mean(dataset: &Dataset, x: &str, y: &str) -> Vec<ChartPoint> {
    let (Some(xi), Some(yi)) = (dataset.column_index(x), dataset.column_index(y)) else {
        return Vec::new();
    };
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for r in dataset.records() {
        let key = r.cells()[xi].to_string();
        let entry = groups.entry(key).or_insert((0.0, 0));
        if let Some(v) = r.cells()[yi].as_finite() {
            entry.0 += v;
            entry.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(k, (sum, n))| ChartPoint::category(k, sum / n.max(1) as f64))
        .collect()
}

/// Row count per distinct string form of `x`, keys ascending.
pub fn category_counts(dataset: &Dataset, x: &str) -> Vec<ChartPoint> {
    let Some(cells) = dataset.column(x) else { return Vec::new() };
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for c in cells {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
    counts.into_iter().map(|(k, n)| ChartPoint::category(k, n as f64)).collect()
}

/// Fixed-count, equal-width histogram over finite `values`.
/// Always `bins` points (zero-count bins included) unless `values` is empty.
pub fn histogram(values: &[f64], bins: usize) -> Vec<ChartPoint> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = bin_width(min, max, bins);

    let mut counts = vec![0usize; bins];
    for &v in values {
        counts[bin_index(v, min, width, bins)] += 1;
    }
    bin_lower_edges(min, width, bins)
        .into_iter()
        .zip(counts)
        .map(|(edge, n)| ChartPoint::category(edge_label(edge), n as f64))
        .collect()
}
