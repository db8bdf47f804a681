// File: crates/glimpse-core/src/error.rs
// Summary: Ingestion error taxonomy. Display strings are the user-facing messages.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// File extension is not one of csv/tsv/json.
    #[error("Unsupported file type. Use CSV, TSV, or JSON.")]
    UnsupportedFormat,
    /// JSON failed to parse, or parsed into the wrong top-level shape.
    #[error("{0}")]
    MalformedJson(String),
}

impl IngestError {
    pub(crate) fn wrong_shape() -> Self {
        IngestError::MalformedJson("JSON must be an array of objects".to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::MalformedJson(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
