// File: crates/glimpse-core/src/ingest.rs
// Summary: Ingestion entry point; dispatches on file extension to a format reader.

use serde_json::{Map, Value};

use crate::delimiter::detect_delimiter;
use crate::error::{IngestError, Result};
use crate::tokenizer::tokenize;
use crate::types::{Cell, Dataset, Record};

/// Built-in fixture: 7 rows, 3 categories.
pub const SAMPLE_CSV: &str = "date,category,value\n\
2025-01-01,A,10\n\
2025-01-02,A,15\n\
2025-01-03,B,7\n\
2025-01-04,B,12\n\
2025-01-05,C,5\n\
2025-01-06,A,20\n\
2025-01-07,C,9";

/// A reader turns the full text of one file into a dataset.
pub trait FormatReader {
    fn id(&self) -> &'static str;
    fn read(&self, content: &str) -> Result<Dataset>;
}

/// CSV/TSV reader. `delimiter: None` means guess it from the text.
pub struct DelimitedReader {
    pub delimiter: Option<char>,
}

impl FormatReader for DelimitedReader {
    fn id(&self) -> &'static str {
        match self.delimiter {
            Some('\t') => "tsv",
            _ => "csv",
        }
    }

    fn read(&self, content: &str) -> Result<Dataset> {
        let delimiter = self.delimiter.unwrap_or_else(|| detect_delimiter(content));
        Ok(tokenize(content, delimiter))
    }
}

/// JSON reader: a top-level array of objects, or `{ "data": [ ... ] }`.
pub struct JsonReader;

impl FormatReader for JsonReader {
    fn id(&self) -> &'static str { "json" }

    fn read(&self, content: &str) -> Result<Dataset> {
        let root: Value = serde_json::from_str(content)?;
        let rows = match root {
            Value::Array(rows) => rows,
            Value::Object(mut obj) => match obj.remove("data") {
                Some(Value::Array(rows)) => rows,
                _ => return Err(IngestError::wrong_shape()),
            },
            _ => return Err(IngestError::wrong_shape()),
        };
        let objects = rows
            .into_iter()
            .map(|v| match v {
                Value::Object(o) => Ok(o),
                _ => Err(IngestError::wrong_shape()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(dataset_from_objects(objects))
    }
}

/// Columns come from the first object's keys; later objects are aligned by
/// name, missing keys become empty cells and extra keys are ignored.
fn dataset_from_objects(objects: Vec<Map<String, Value>>) -> Dataset {
    let columns: Vec<String> = objects.first().map(|o| o.keys().cloned().collect()).unwrap_or_default();
    let records = objects
        .iter()
        .map(|obj| {
            let cells = columns.iter().map(|c| obj.get(c).map(json_cell).unwrap_or(Cell::Empty)).collect();
            Record::new(cells)
        })
        .collect();
    Dataset::new(columns, records)
}

/// JSON values already carry their type, so strings are not re-coerced.
fn json_cell(v: &Value) -> Cell {
    match v {
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(s) if s.is_empty() => Cell::Empty,
        Value::String(s) => Cell::Text(s.clone()),
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Text(b.to_string()),
        nested => Cell::Text(nested.to_string()),
    }
}

/// Pick a reader by (case-insensitive) file extension.
pub fn reader_for(filename: &str) -> Result<Box<dyn FormatReader>> {
    let name = filename.to_ascii_lowercase();
    if name.ends_with(".csv") {
        Ok(Box::new(DelimitedReader { delimiter: None }))
    } else if name.ends_with(".tsv") {
        Ok(Box::new(DelimitedReader { delimiter: Some('\t') }))
    } else if name.ends_with(".json") {
        Ok(Box::new(JsonReader))
    } else {
        Err(IngestError::UnsupportedFormat)
    }
}

/// Parse `content` according to `filename`'s extension.
pub fn ingest(content: &str, filename: &str) -> Result<Dataset> {
    let reader = reader_for(filename)?;
    let dataset = reader.read(content)?;
    tracing::debug!(
        file = filename,
        format = reader.id(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "ingested file"
    );
    Ok(dataset)
}

/// The built-in sample, fed through the regular CSV path.
pub fn load_sample() -> Dataset {
    tokenize(SAMPLE_CSV, ',')
}
