// File: crates/glimpse-core/src/delimiter.rs
// Summary: Field separator guessing from the head of a text file.

use crate::types::DELIMITER_SAMPLE_LINES;

/// Candidates in priority order; ties resolve to the earliest.
pub const CANDIDATES: [char; 4] = [',', '\t', ';', '|'];

#[derive(Clone, Copy, Debug)]
pub struct DetectOptions {
    pub sample_lines: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self { sample_lines: DELIMITER_SAMPLE_LINES }
    }
}

/// Guess the delimiter of `text` using the default sample size.
pub fn detect_delimiter(text: &str) -> char {
    detect_delimiter_with(text, &DetectOptions::default())
}

/// Score each candidate as `mean(field counts) - variance(field counts)` over
/// the sampled lines and keep the strictly best one.
pub fn detect_delimiter_with(text: &str, opts: &DetectOptions) -> char {
    let sample: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .take(opts.sample_lines.max(1))
        .collect();

    let mut best = CANDIDATES[0];
    let mut best_score = f64::NEG_INFINITY;
    for &d in &CANDIDATES {
        let counts: Vec<f64> = sample.iter().map(|l| l.split(d).count() as f64).collect();
        let score = mean(&counts) - population_variance(&counts);
        if score > best_score {
            best_score = score;
            best = d;
        }
    }
    tracing::debug!(delimiter = ?best, score = best_score, lines = sample.len(), "detected delimiter");
    best
}

pub(crate) fn mean(v: &[f64]) -> f64 {
    if v.is_empty() { return 0.0; }
    v.iter().sum::<f64>() / v.len() as f64
}

/// Mean of squared deviations (divisor = n). Zero for an empty slice.
pub(crate) fn population_variance(v: &[f64]) -> f64 {
    if v.is_empty() { return 0.0; }
    let m = mean(v);
    v.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / v.len() as f64
}
