//! The export collaborator seam.
//!
//! Spreadsheet I/O lives outside the core. This module fixes the file
//! contract (names, column order) and converts the grid to and from the
//! loosely-typed records a workbook writer consumes, so an export/import
//! cycle reproduces every field value.

use serde_json::{Map, Value};

use crate::domain::PostingRow;
use crate::errors::CoreError;

/// File name the export collaborator writes.
pub const EXPORT_FILE_NAME: &str = "grid_export.xlsx";

/// Sheet name inside the exported workbook.
pub const EXPORT_SHEET_NAME: &str = "Grid";

/// Consumes the accumulated grid for serialization to a workbook. Implemented
/// by the spreadsheet collaborator, not by the core.
pub trait GridExporter: Send + Sync {
    fn export(&self, rows: &[PostingRow]) -> Result<(), CoreError>;
}

/// Renders the grid as one record per row, keyed by the bank column headers
/// in [`crate::domain::COLUMNS`] order.
pub fn grid_to_records(rows: &[PostingRow]) -> Result<Vec<Map<String, Value>>, CoreError> {
    rows.iter()
        .map(|row| match serde_json::to_value(row)? {
            Value::Object(record) => Ok(record),
            other => Err(CoreError::InvalidRecord(format!(
                "posting row serialized to {other:?}"
            ))),
        })
        .collect()
}

/// Rebuilds grid rows from exported records. Numeric cells are accepted where
/// a writer stored an amount as a number rather than its formatted string.
pub fn records_to_grid(records: &[Map<String, Value>]) -> Result<Vec<PostingRow>, CoreError> {
    records
        .iter()
        .map(|record| {
            let normalized: Map<String, Value> = record
                .iter()
                .map(|(header, cell)| (header.clone(), normalize_cell(cell)))
                .collect();
            Ok(serde_json::from_value(Value::Object(normalized))?)
        })
        .collect()
}

fn normalize_cell(cell: &Value) -> Value {
    match cell {
        Value::Number(number) => Value::String(number.to_string()),
        other => other.clone(),
    }
}
