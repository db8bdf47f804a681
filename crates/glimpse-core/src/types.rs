// File: crates/glimpse-core/src/types.rs
// Summary: Shared data model (cells, datasets, chart points, statistics) and constants.

use std::fmt;

use serde::Serialize;

/// Number of equal-width bins used by the bar-mode histogram.
pub const HISTOGRAM_BINS: usize = 12;
/// Lines sampled from the head of a file when guessing the delimiter.
pub const DELIMITER_SAMPLE_LINES: usize = 5;
/// Rows per preview page.
pub const PAGE_SIZE: usize = 10;

/// One typed value produced by coercion (or carried over from JSON).
/// `Empty` is the empty string, a terminal value rather than "missing".
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Number(n) => s.serialize_f64(*n),
            Cell::Text(t) => s.serialize_str(t),
            Cell::Empty => s.serialize_str(""),
        }
    }
}

impl Cell {
    /// The numeric value when this cell holds a finite number.
    #[inline]
    pub fn as_finite(&self) -> Option<f64> {
        match *self {
            Cell::Number(n) if n.is_finite() => Some(n),
            _ => None,
        }
    }
}

/// String form used for grouping keys: numbers print without a trailing `.0`,
/// empty cells print as the empty string.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

/// One row, positionally aligned with the owning dataset's columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    cells: Vec<Cell>,
}

impl Record {
    pub fn new(cells: Vec<Cell>) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Cell] { &self.cells }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Cell> { self.cells.get(index) }
}

/// Ordered, uniform-shape rows from one uploaded file.
/// Contract: every record has exactly `columns.len()` cells and column names
/// are unique. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset; short records are padded with `Cell::Empty` and long
    /// ones truncated so the shape contract holds.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        let width = columns.len();
        let records = records
            .into_iter()
            .map(|mut r| {
                r.cells.resize(width, Cell::Empty);
                r
            })
            .collect();
        Self { columns, records }
    }

    pub fn empty() -> Self { Self::default() }

    pub fn columns(&self) -> &[String] { &self.columns }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool { self.column_index(name).is_some() }

    /// Cells of one column in row order; `None` when the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(name)?;
        Some(self.records.iter().map(move |r| &r.cells[idx]))
    }

    /// Finite numeric values of one column in row order (empty if absent).
    pub fn finite_values(&self, name: &str) -> Vec<f64> {
        self.column(name)
            .map(|cells| cells.filter_map(Cell::as_finite).collect())
            .unwrap_or_default()
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let idx = self.column_index(name)?;
        self.records.get(row).and_then(|r| r.get(idx))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Scatter,
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            other => Err(format!("unknown chart kind '{other}' (expected bar, line or scatter)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Category key, bin label, raw value, row index or timestamp depending on the chart kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Category(String),
    Number(f64),
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Category(s) => f.write_str(s),
            XValue::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: XValue,
    pub y: f64,
}

impl ChartPoint {
    pub fn category(x: impl Into<String>, y: f64) -> Self {
        Self { x: XValue::Category(x.into()), y }
    }

    pub fn numeric(x: f64, y: f64) -> Self {
        Self { x: XValue::Number(x), y }
    }
}

/// Numeric/categorical partition of a dataset's columns, both in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl Classification {
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|c| c == column) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|c| c == column) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }
}

/// First/second-moment summary of one numeric column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}
