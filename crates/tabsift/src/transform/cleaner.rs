//! Dataset cleaning: deduplication, text normalization and imputation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::inference::{median, mode};
use crate::schema::{Column, ColumnType, Dataset, Value, ValueKey};

/// Counts describing what cleaning changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_before: usize,
    pub rows_after: usize,
    pub missing_before: usize,
    pub missing_after: usize,
    pub duplicates_removed: usize,
}

/// Cleaner configuration.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Fill for a non-numeric column with no values at all.
    pub unknown_fill: String,
    /// Fill for a numeric column with no values at all.
    pub empty_numeric_fill: f64,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            unknown_fill: "Unknown".to_string(),
            empty_numeric_fill: 0.0,
        }
    }
}

/// Cleans raw datasets.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    config: CleanerConfig,
}

impl Cleaner {
    /// Create a cleaner with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cleaner with custom configuration.
    pub fn with_config(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Clean a dataset. The input is left untouched.
    ///
    /// Steps, in order: drop exact duplicate rows (first occurrence wins),
    /// strip text cells and treat `""`/`"nan"` as missing, fill numeric gaps
    /// with the column median, fill remaining gaps with the column mode.
    pub fn clean(&self, raw: &Dataset) -> (Dataset, CleaningReport) {
        let rows_before = raw.row_count();
        let missing_before = raw.missing_count();

        let mut cleaned = drop_duplicates(raw);

        for column in cleaned.columns_mut() {
            if column.dtype == ColumnType::Object {
                normalize_text(column);
            }
        }

        for column in cleaned.columns_mut() {
            if column.missing_count() == 0 {
                continue;
            }
            if column.dtype.is_numeric() {
                self.fill_median(column);
            } else {
                self.fill_mode(column);
            }
        }

        let rows_after = cleaned.row_count();
        let report = CleaningReport {
            rows_before,
            rows_after,
            missing_before,
            missing_after: cleaned.missing_count(),
            duplicates_removed: rows_before - rows_after,
        };

        info!(
            rows_before = report.rows_before,
            rows_after = report.rows_after,
            duplicates_removed = report.duplicates_removed,
            missing_before = report.missing_before,
            missing_after = report.missing_after,
            "cleaning complete"
        );

        (cleaned, report)
    }

    fn fill_median(&self, column: &mut Column) {
        let fill = median(&column.numeric_values()).unwrap_or(self.config.empty_numeric_fill);
        debug!(column = %column.name, fill, "filling numeric gaps with median");

        // Integer columns cannot hold the fill, widen to float
        if column.dtype == ColumnType::Int64 {
            column.dtype = ColumnType::Float64;
            for value in &mut column.values {
                if let Value::Int(i) = value {
                    *value = Value::Float(*i as f64);
                }
            }
        }

        for value in &mut column.values {
            if value.is_missing() {
                *value = Value::Float(fill);
            }
        }
    }

    fn fill_mode(&self, column: &mut Column) {
        let texts: Vec<String> = column
            .values
            .iter()
            .filter(|v| !v.is_missing())
            .map(Value::to_text)
            .collect();

        let fill = mode(texts.iter().map(String::as_str))
            .and_then(|m| {
                column
                    .values
                    .iter()
                    .find(|v| !v.is_missing() && v.to_text() == m)
                    .cloned()
            })
            .unwrap_or_else(|| Value::Text(self.config.unknown_fill.clone()));
        debug!(column = %column.name, fill = %fill, "filling gaps with most frequent value");

        for value in &mut column.values {
            if value.is_missing() {
                *value = fill.clone();
            }
        }
    }
}

/// Keep the first occurrence of every distinct row, preserving order.
fn drop_duplicates(raw: &Dataset) -> Dataset {
    let mut seen: HashSet<Vec<ValueKey>> = HashSet::new();
    let keep: Vec<usize> = (0..raw.row_count())
        .filter(|&row| {
            let key: Vec<ValueKey> = raw.columns().iter().map(|c| c.values[row].key()).collect();
            seen.insert(key)
        })
        .collect();

    raw.take_rows(&keep)
}

/// Strip whitespace from every cell of a text column; `""` and `"nan"` become missing.
fn normalize_text(column: &mut Column) {
    for value in &mut column.values {
        if value.is_missing() {
            *value = Value::Missing;
            continue;
        }
        let text = value.to_text();
        let trimmed = text.trim();
        *value = if trimmed.is_empty() || trimmed == "nan" {
            Value::Missing
        } else {
            Value::Text(trimmed.to_string())
        };
    }
}
