//! Excel workbook reading.

use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};

use crate::error::{Result, SiftError};
use crate::inference::{column_from_values, is_na_token};
use crate::schema::{ColumnType, Dataset, Value};

use super::source::unique_headers;

/// Read the first worksheet; the first row holds the column names.
pub fn read_first_sheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SiftError::EmptyData("Workbook has no worksheets".to_string()))??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(header_text).collect())
        .ok_or_else(|| SiftError::EmptyData("No columns to parse from file".to_string()))?;
    let headers = unique_headers(headers);

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, cells) in columns.iter_mut().enumerate() {
            cells.push(row.get(idx).map(cell_to_value).unwrap_or(Value::Missing));
        }
    }

    Dataset::new(
        headers
            .into_iter()
            .zip(columns)
            .map(|(name, values)| column_from_values(name, values, ColumnType::Float64))
            .collect(),
    )
}

fn header_text(cell: &Data) -> String {
    match cell_to_value(cell) {
        Value::Missing => String::new(),
        value => value.to_text(),
    }
}

/// Convert a spreadsheet cell to a dataset cell.
pub(crate) fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Missing,
        Data::String(s) if is_na_token(s) => Value::Missing,
        Data::String(s) => Value::Text(s.clone()),
        Data::Int(i) => Value::Int(*i),
        // Workbooks store whole numbers as floats
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Value::Int(*f as i64),
        Data::Float(f) => Value::Float(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) => Value::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Value::Text(cell.to_string()),
        },
        other => Value::Text(other.to_string()),
    }
}
