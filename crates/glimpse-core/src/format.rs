// File: crates/glimpse-core/src/format.rs
// Summary: Display formatting for preview cells and statistic values.

use crate::types::Cell;

/// Text cells longer than this are truncated for display.
pub const MAX_CELL_CHARS: usize = 80;

/// Preview form of a cell: integers as-is, other numbers to 3 decimals with an
/// all-zero fraction dropped, long text cut to 77 chars plus `...`.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Number(n) if n.fract() == 0.0 => format!("{}", n),
        Cell::Number(n) => strip_zero_fraction(format!("{:.3}", n)),
        Cell::Text(s) if s.chars().count() > MAX_CELL_CHARS => {
            let head: String = s.chars().take(MAX_CELL_CHARS - 3).collect();
            format!("{head}...")
        }
        Cell::Text(s) => s.clone(),
    }
}

/// At most 3 fraction digits, trailing zeros trimmed.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let s = format!("{:.3}", v);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.').to_string() } else { s };
    if s == "-0" { "0".to_string() } else { s }
}

fn strip_zero_fraction(s: String) -> String {
    match s.split_once('.') {
        Some((int, frac)) if frac.chars().all(|c| c == '0') => int.to_string(),
        _ => s,
    }
}
