//! JSON and JSON-lines record parsing.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{Result, SiftError};
use crate::inference::column_from_values;
use crate::schema::{ColumnType, Dataset, Value};

/// Parse a JSON document: an array of records, or a column-oriented object.
pub fn parse_json(text: &str) -> Result<Dataset> {
    match serde_json::from_str::<JsonValue>(text)? {
        JsonValue::Array(records) => records_to_dataset(records),
        JsonValue::Object(columns) => columns_to_dataset(columns),
        _ => Err(SiftError::Processing(
            "Expected a JSON array of records or an object of columns".to_string(),
        )),
    }
}

/// Parse newline-delimited JSON records. Blank lines are skipped.
pub fn parse_json_lines(text: &str) -> Result<Dataset> {
    let records = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str::<JsonValue>)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    records_to_dataset(records)
}

fn records_to_dataset(records: Vec<JsonValue>) -> Result<Dataset> {
    let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();

    for (row, record) in records.into_iter().enumerate() {
        let JsonValue::Object(fields) = record else {
            return Err(SiftError::Processing(format!(
                "Record {} is not a JSON object",
                row + 1
            )));
        };

        for (key, field) in fields {
            let cells = columns
                .entry(key)
                .or_insert_with(|| vec![Value::Missing; row]);
            cells.push(json_to_value(&field));
        }

        for cells in columns.values_mut() {
            if cells.len() < row + 1 {
                cells.push(Value::Missing);
            }
        }
    }

    build(columns)
}

fn columns_to_dataset(columns: serde_json::Map<String, JsonValue>) -> Result<Dataset> {
    // Index labels of dict-shaped columns, in first-seen order
    let mut index: IndexMap<String, ()> = IndexMap::new();
    for field in columns.values() {
        if let JsonValue::Object(cells) = field {
            for key in cells.keys() {
                index.entry(key.clone()).or_insert(());
            }
        }
    }

    let mut result: IndexMap<String, Vec<Value>> = IndexMap::new();
    for (name, field) in columns {
        let cells = match field {
            JsonValue::Array(items) => items.iter().map(json_to_value).collect(),
            JsonValue::Object(cells) => index
                .keys()
                .map(|k| cells.get(k).map(json_to_value).unwrap_or(Value::Missing))
                .collect(),
            _ => {
                return Err(SiftError::Processing(format!(
                    "Column '{}' is not an array or an object",
                    name
                )));
            }
        };
        result.insert(name, cells);
    }

    build(result)
}

fn build(columns: IndexMap<String, Vec<Value>>) -> Result<Dataset> {
    Dataset::new(
        columns
            .into_iter()
            .map(|(name, values)| column_from_values(name, values, ColumnType::Object))
            .collect(),
    )
}

/// Convert a JSON scalar to a cell. Nested structures are kept as JSON text.
fn json_to_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Missing,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Missing),
        },
        JsonValue::String(s) => Value::Text(s.clone()),
        nested => Value::Text(nested.to_string()),
    }
}
