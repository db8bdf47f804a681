// File: crates/glimpse-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for chart data.
// Behavior:
// - Builds chart points for the sample fixture and serializes them to JSON.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares parsed JSON values for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use glimpse_core::{build_chart_data, classify_columns, load_sample, ChartKind};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, got: &serde_json::Value) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        let text = serde_json::to_string_pretty(got).expect("serialize snapshot");
        std::fs::write(&path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", path.display());
        return;
    }
    if path.exists() {
        let text = std::fs::read_to_string(&path).expect("read snapshot");
        let want: serde_json::Value = serde_json::from_str(&text).expect("parse snapshot");
        assert_eq!(got, &want, "chart data differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn sample_chart(kind: ChartKind, x: &str, y: &str) -> serde_json::Value {
    let ds = load_sample();
    let cls = classify_columns(&ds, None);
    let points = build_chart_data(&ds, kind, Some(x), Some(y), &cls.numeric, &cls.categorical);
    serde_json::to_value(points).expect("points to json")
}

#[test]
fn golden_sample_bar_by_category() {
    write_or_compare("sample_bar_category.json", &sample_chart(ChartKind::Bar, "category", "value"));
}

#[test]
fn golden_sample_histogram() {
    write_or_compare("sample_histogram.json", &sample_chart(ChartKind::Bar, "value", "value"));
}

#[test]
fn golden_sample_line_by_date() {
    write_or_compare("sample_line_date.json", &sample_chart(ChartKind::Line, "date", "value"));
}
