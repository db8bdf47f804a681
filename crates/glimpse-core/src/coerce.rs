// File: crates/glimpse-core/src/coerce.rs
// Summary: Raw field → typed cell coercion, plus the shared date grammar.
// Notes:
// - Order matters: empty, then number, then date-shaped text, then text.
//   Dates stay text at ingestion; only line/scatter x mapping converts them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Cell;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[0-9]*(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?$").expect("number grammar")
});

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date grammar"));

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Convert one raw field into a cell. Trims defensively.
pub fn coerce_field(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Some(n) = parse_number(trimmed) {
        return Cell::Number(n);
    }
    // Date-shaped text falls through here too and stays verbatim.
    Cell::Text(trimmed.to_string())
}

/// Finite number matching the numeric grammar (sign, digits, fraction, exponent).
pub fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() || !NUMBER.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Epoch milliseconds (UTC) for a `YYYY-MM-DD`-shaped date or date-time string.
/// Offsets in RFC 3339 strings are honored; naive values are read as UTC.
pub fn parse_date_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if !DATE_SHAPE.is_match(s) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc().timestamp_millis())
}
