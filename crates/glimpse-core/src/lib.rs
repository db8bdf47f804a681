// File: crates/glimpse-core/src/lib.rs
// Summary: Core library entry point; exports the ingestion pipeline and derived-data API.

pub mod types;
pub mod error;
pub mod delimiter;
pub mod coerce;
pub mod tokenizer;
pub mod ingest;
pub mod classify;
pub mod grid;
pub mod aggregate;
pub mod chart;
pub mod stats;
pub mod format;
pub mod view;

pub use types::{Cell, ChartKind, ChartPoint, Classification, ColumnKind, Dataset, Record, Statistics, XValue};
pub use error::{IngestError, Result};
pub use delimiter::{detect_delimiter, DetectOptions};
pub use coerce::coerce_field;
pub use tokenizer::{split_line, tokenize};
pub use ingest::{ingest, load_sample, FormatReader, SAMPLE_CSV};
pub use classify::classify_columns;
pub use chart::{build_chart_data, build_chart_data_with, BarMode, ChartOptions};
pub use stats::compute_statistics;
pub use format::{format_cell, format_number};
pub use view::{LoadOutcome, ReadTicket, ViewState};
