// File: crates/glimpse-core/src/classify.rs
// Summary: Numeric vs categorical column partition.

use crate::types::{Classification, Dataset};

/// A column is numeric when *any* row holds a finite number in it; one stray
/// numeric value is enough. `columns` defaults to the dataset's header order.
pub fn classify_columns(dataset: &Dataset, columns: Option<&[String]>) -> Classification {
    let columns = columns.unwrap_or(dataset.columns());
    let mut out = Classification::default();
    for name in columns {
        let numeric = dataset
            .column(name)
            .map(|mut cells| cells.any(|c| c.as_finite().is_some()))
            .unwrap_or(false);
        if numeric {
            out.numeric.push(name.clone());
        } else {
            out.categorical.push(name.clone());
        }
    }
    out
}
