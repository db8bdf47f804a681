// File: crates/glimpse-core/src/grid.rs
// Summary: Equal-width bin layout helpers for histograms.

/// Bin width over `[min, max]`; a zero span falls back to width 1. A span that
/// overflows stays infinite.
pub fn bin_width(min: f64, max: f64, bins: usize) -> f64 {
    let w = (max - min) / bins.max(1) as f64;
    if w == 0.0 { 1.0 } else { w }
}

/// Lower edge of every bin. The first edge is always `min`, even for an infinite width.
pub fn bin_lower_edges(min: f64, width: f64, bins: usize) -> Vec<f64> {
    (0..bins).map(|i| if i == 0 { min } else { min + i as f64 * width }).collect()
}

/// Bin index of `v`; the max value and rounding overshoot land in the last bin.
/// An undefined index (infinite over infinite width) goes to the first bin.
#[inline]
pub fn bin_index(v: f64, min: f64, width: f64, bins: usize) -> usize {
    let raw = ((v - min) / width).floor();
    if raw.is_nan() {
        return 0;
    }
    clamp(raw, 0.0, bins.saturating_sub(1) as f64) as usize
}

/// One-decimal label for a bin edge. Exact ties (odd multiples of 0.25) round
/// away from zero, e.g. 6.25 -> "6.3". A small negative edge keeps its sign
/// ("-0.0"); only an edge equal to zero prints as "0.0".
pub fn edge_label(edge: f64) -> String {
    if edge == 0.0 {
        return "0.0".to_string();
    }
    if edge.is_infinite() {
        return if edge > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let q = edge * 4.0;
    let edge = if q.fract() == 0.0 && q.rem_euclid(2.0) == 1.0 { (edge * 10.0).round() / 10.0 } else { edge };
    format!("{:.1}", edge)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
