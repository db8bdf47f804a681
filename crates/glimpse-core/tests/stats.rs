// File: crates/glimpse-core/tests/stats.rs
// Purpose: Summary statistics target selection and population moments.

use glimpse_core::stats::summarize;
use glimpse_core::{classify_columns, compute_statistics, ingest};

#[test]
fn population_std_of_one_to_four() {
    let s = summarize("v", &[1.0, 2.0, 3.0, 4.0]).expect("non-empty");
    assert_eq!(s.count, 4);
    assert_eq!(s.mean, 2.5);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 4.0);
    assert!((s.std * s.std - 1.25).abs() < 1e-12);
    assert!((s.std - 1.118_033_988_749_895).abs() < 1e-12);
}

#[test]
fn targets_requested_numeric_column_else_first() {
    let ds = ingest("name,a,b\nx,1,10\ny,3,30\nz,oops,", "t.csv").expect("csv");
    let cls = classify_columns(&ds, None);

    let b = compute_statistics(&ds, &cls.numeric, Some("b")).expect("b stats");
    assert_eq!((b.column.as_str(), b.count, b.mean), ("b", 2, 20.0));

    let fallback = compute_statistics(&ds, &cls.numeric, Some("name")).expect("fallback stats");
    assert_eq!(fallback.column, "a");
    assert_eq!(fallback.count, 2);
    assert_eq!(fallback.std, 1.0);

    assert_eq!(compute_statistics(&ds, &cls.numeric, None).map(|s| s.column), Some("a".to_string()));
}

#[test]
fn absent_without_numeric_data() {
    let ds = ingest("name\nx\ny", "t.csv").expect("csv");
    let cls = classify_columns(&ds, None);
    assert!(compute_statistics(&ds, &cls.numeric, Some("name")).is_none());
    // a caller-supplied numeric list naming a text column still yields nothing
    assert!(compute_statistics(&ds, &["name".to_string()], None).is_none());
}
