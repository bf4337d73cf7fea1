//! Core type definitions for dataset columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred storage type for a column.
///
/// Names follow the dtype vocabulary front-ends already chart on
/// (`int64`, `float64`, `bool`, `object`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Whole numbers with no missing cells.
    #[serde(rename = "int64")]
    Int64,
    /// Floating-point numbers, or integers with missing cells.
    #[serde(rename = "float64")]
    Float64,
    /// Boolean values with no missing cells.
    #[serde(rename = "bool")]
    Bool,
    /// Text or mixed values.
    #[serde(rename = "object")]
    Object,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }

    /// Dtype name as reported in analysis output.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::Object => "object",
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Object
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
