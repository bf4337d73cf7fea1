//! Column-oriented dataset representation.

use std::collections::HashSet;

use crate::error::{Result, SiftError};

use super::types::ColumnType;
use super::value::Value;

/// A named, typed column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Inferred storage type.
    pub dtype: ColumnType,
    /// Cells in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Number of distinct non-missing values.
    pub fn unique_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| !v.is_missing())
            .map(Value::key)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Non-missing values coerced to numbers; invalid entries are dropped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_f64).collect()
    }
}

/// An ordered set of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create a dataset, checking that names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SiftError::Processing(format!(
                    "Duplicate column name '{}'",
                    column.name
                )));
            }
        }

        if let Some(first) = columns.first() {
            let rows = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
                return Err(SiftError::Processing(format!(
                    "Column '{}' has {} rows, expected {}",
                    bad.name,
                    bad.len(),
                    rows
                )));
            }
        }

        Ok(Self { columns })
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Get a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Total number of missing cells across all columns.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// A new dataset holding the given rows, in the given order.
    pub fn take_rows(&self, indices: &[usize]) -> Dataset {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                dtype: c.dtype,
                values: indices
                    .iter()
                    .filter_map(|&i| c.values.get(i).cloned())
                    .collect(),
            })
            .collect();
        Dataset { columns }
    }

    /// Rows `[start, end)`, clamped to the available rows.
    pub fn slice(&self, start: usize, end: usize) -> Dataset {
        let end = end.min(self.row_count());
        let start = start.min(end);
        let indices: Vec<usize> = (start..end).collect();
        self.take_rows(&indices)
    }
}
