// File: crates/glimpse-core/tests/format.rs
// Purpose: Preview cell and statistic formatting.

use glimpse_core::{format_cell, format_number, Cell};

#[test]
fn numbers_in_cells() {
    assert_eq!(format_cell(&Cell::Number(42.0)), "42");
    assert_eq!(format_cell(&Cell::Number(-3.0)), "-3");
    assert_eq!(format_cell(&Cell::Number(1.23456)), "1.235");
    assert_eq!(format_cell(&Cell::Number(1.5)), "1.500");
    assert_eq!(format_cell(&Cell::Number(2.0004)), "2");
}

#[test]
fn text_and_empty_cells() {
    assert_eq!(format_cell(&Cell::Empty), "");
    assert_eq!(format_cell(&Cell::Text("short".into())), "short");

    let long = "x".repeat(100);
    let shown = format_cell(&Cell::Text(long));
    assert_eq!(shown.len(), 80);
    assert!(shown.ends_with("..."));

    let exactly = "y".repeat(80);
    assert_eq!(format_cell(&Cell::Text(exactly.clone())), exactly);
}

#[test]
fn statistic_values() {
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(78.0 / 7.0), "11.143");
    assert_eq!(format_number(7.0), "7");
    assert_eq!(format_number(-0.0001), "0");
}
