// File: crates/glimpse-core/src/tokenizer.rs
// Summary: Quote-aware delimited-text tokenizer producing a coerced Dataset.
// Notes:
// - Never fails: ragged rows are padded or truncated onto the header.
// - Quotes are not stripped by position; a `"` anywhere toggles quoted mode,
//   and `""` inside quotes is one literal quote.

use crate::coerce::coerce_field;
use crate::types::{Cell, Dataset, Record};

/// Split one line into raw (uncoerced) fields.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

/// Non-empty lines after CRLF / lone CR normalization.
fn body_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Header names (trimmed, `col_<n>` for blanks) and the column slot each
/// header position writes to. Repeated names share the first slot.
fn resolve_header(fields: &[String]) -> (Vec<String>, Vec<usize>) {
    let mut columns: Vec<String> = Vec::with_capacity(fields.len());
    let mut slots = Vec::with_capacity(fields.len());
    for (i, raw) in fields.iter().enumerate() {
        let trimmed = raw.trim();
        let name = if trimmed.is_empty() { format!("col_{}", i + 1) } else { trimmed.to_string() };
        match columns.iter().position(|c| *c == name) {
            Some(existing) => slots.push(existing),
            None => {
                slots.push(columns.len());
                columns.push(name);
            }
        }
    }
    (columns, slots)
}

/// Tokenize delimited text into a dataset. The first non-empty line is the header.
pub fn tokenize(text: &str, delimiter: char) -> Dataset {
    let lines = body_lines(text);
    let Some((header_line, body)) = lines.split_first() else {
        return Dataset::empty();
    };

    let (columns, slots) = resolve_header(&split_line(header_line, delimiter));

    let mut records = Vec::with_capacity(body.len());
    let mut skipped = 0usize;
    for line in body {
        let fields = split_line(line, delimiter);
        if fields.len() == 1 && fields[0].is_empty() {
            skipped += 1;
            continue;
        }
        let mut cells = vec![Cell::Empty; columns.len()];
        for (pos, &slot) in slots.iter().enumerate() {
            cells[slot] = fields.get(pos).map(|f| coerce_field(f)).unwrap_or(Cell::Empty);
        }
        records.push(Record::new(cells));
    }

    tracing::debug!(
        columns = columns.len(),
        rows = records.len(),
        blank_rows = skipped,
        delimiter = ?delimiter,
        "tokenized delimited text"
    );
    Dataset::new(columns, records)
}
