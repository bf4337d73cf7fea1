//! Dataset summary: column info, chart aggregates and descriptive statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inference::{describe, round_to, value_counts};
use crate::output::{Record, frame_preview};
use crate::schema::{ColumnType, Dataset, Value};
use crate::transform::CleaningReport;

use super::distribution::{NumericDistribution, equal_width_bins};

/// Decimal places kept in numeric summaries.
const SUMMARY_DECIMALS: i32 = 3;

/// Limits applied when summarizing a dataset.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Rows included in the preview.
    pub preview_rows: usize,
    /// Maximum characters of a text cell in the preview.
    pub max_text_chars: usize,
    /// Numeric columns that get a histogram.
    pub distribution_columns: usize,
    /// Histogram bars per column.
    pub distribution_bins: usize,
    /// Non-numeric columns that get a frequency table.
    pub categorical_columns: usize,
    /// Entries per frequency table.
    pub top_values: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_rows: 50,
            max_text_chars: 160,
            distribution_columns: 3,
            distribution_bins: 8,
            categorical_columns: 5,
            top_values: 8,
        }
    }
}

/// Shape of the dataset as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub file_name: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
}

impl DatasetInfo {
    /// Describe a raw dataset loaded from `file_name`.
    pub fn new(file_name: impl Into<String>, raw: &Dataset) -> Self {
        Self {
            file_name: file_name.into(),
            rows: raw.row_count(),
            columns: raw.column_count(),
            column_names: raw.column_names().into_iter().map(str::to_string).collect(),
        }
    }
}

/// Cleaning counts plus where the cleaned copy was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningSummary {
    #[serde(flatten)]
    pub report: CleaningReport,
    pub cleaned_csv_path: String,
}

/// Per-column overview. `missing` counts the raw data; `dtype` and
/// `unique` describe the cleaned data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: ColumnType,
    pub missing: usize,
    pub unique: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtypeCount {
    pub dtype: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// One entry of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// Chart-ready aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub dtype_counts: Vec<DtypeCount>,
    pub missing_by_column: Vec<MissingCount>,
    pub numeric_distributions: Vec<NumericDistribution>,
    pub categorical_summary: IndexMap<String, Vec<CategoryCount>>,
}

/// Descriptive statistics of one numeric column, rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: f64,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    fn from_values(values: &[f64]) -> Self {
        let d = describe(values);
        let round = |v: Option<f64>| v.map(|x| round_to(x, SUMMARY_DECIMALS));
        Self {
            count: d.count as f64,
            mean: round(d.mean),
            std: round(d.std),
            min: round(d.min),
            q1: round(d.q1),
            median: round(d.median),
            q3: round(d.q3),
            max: round(d.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub numeric_summary: IndexMap<String, NumericSummary>,
    pub categorical_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
}

/// Full result of analyzing a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dataset: DatasetInfo,
    pub cleaning: CleaningSummary,
    pub column_info: Vec<ColumnInfo>,
    pub preview: Vec<Record>,
    pub charts: Charts,
    pub stats: Stats,
}

/// Builds summaries of raw/cleaned dataset pairs.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AnalysisConfig,
}

impl Aggregator {
    /// Create an aggregator with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with custom limits.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Summarize a raw dataset and its cleaned counterpart.
    ///
    /// Both datasets must have the same columns in the same order.
    pub fn summarize(
        &self,
        raw: &Dataset,
        cleaned: &Dataset,
        dataset: DatasetInfo,
        cleaning: CleaningSummary,
    ) -> AnalysisResult {
        let numeric_columns: Vec<String> = cleaned
            .columns()
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .map(|c| c.name.clone())
            .collect();
        let categorical_columns: Vec<String> = cleaned
            .columns()
            .iter()
            .filter(|c| !c.dtype.is_numeric())
            .map(|c| c.name.clone())
            .collect();
        debug!(
            numeric = numeric_columns.len(),
            categorical = categorical_columns.len(),
            "summarizing dataset"
        );

        let charts = Charts {
            dtype_counts: dtype_counts(cleaned),
            missing_by_column: raw
                .columns()
                .iter()
                .map(|c| MissingCount {
                    column: c.name.clone(),
                    missing: c.missing_count(),
                })
                .collect(),
            numeric_distributions: self.numeric_distributions(cleaned, &numeric_columns),
            categorical_summary: self.categorical_summary(cleaned, &categorical_columns),
        };

        let numeric_summary = numeric_columns
            .iter()
            .filter_map(|name| cleaned.column(name))
            .map(|c| (c.name.clone(), NumericSummary::from_values(&c.numeric_values())))
            .collect();

        AnalysisResult {
            dataset,
            cleaning,
            column_info: column_info(raw, cleaned),
            preview: frame_preview(cleaned, self.config.preview_rows, self.config.max_text_chars),
            charts,
            stats: Stats {
                numeric_summary,
                categorical_columns,
                numeric_columns,
            },
        }
    }

    fn numeric_distributions(&self, cleaned: &Dataset, numeric: &[String]) -> Vec<NumericDistribution> {
        numeric
            .iter()
            .take(self.config.distribution_columns)
            .filter_map(|name| cleaned.column(name))
            .filter_map(|column| {
                let bins = equal_width_bins(&column.numeric_values(), self.config.distribution_bins);
                if bins.is_empty() {
                    debug!(column = %column.name, "no numeric values to bin");
                    return None;
                }
                Some(NumericDistribution {
                    column: column.name.clone(),
                    bins,
                })
            })
            .collect()
    }

    fn categorical_summary(
        &self,
        cleaned: &Dataset,
        categorical: &[String],
    ) -> IndexMap<String, Vec<CategoryCount>> {
        categorical
            .iter()
            .take(self.config.categorical_columns)
            .filter_map(|name| cleaned.column(name))
            .map(|column| {
                let counts = value_counts(column.values.iter().map(Value::to_text))
                    .into_iter()
                    .take(self.config.top_values)
                    .map(|(name, value)| CategoryCount { name, value })
                    .collect();
                (column.name.clone(), counts)
            })
            .collect()
    }
}

/// Column count per dtype, most common first.
fn dtype_counts(cleaned: &Dataset) -> Vec<DtypeCount> {
    value_counts(cleaned.columns().iter().map(|c| c.dtype.name().to_string()))
        .into_iter()
        .map(|(dtype, count)| DtypeCount { dtype, count })
        .collect()
}

fn column_info(raw: &Dataset, cleaned: &Dataset) -> Vec<ColumnInfo> {
    cleaned
        .columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name.clone(),
            dtype: column.dtype,
            missing: raw.column(&column.name).map(|c| c.missing_count()).unwrap_or(0),
            unique: column.unique_count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;
    use crate::transform::Cleaner;
    use serde_json::json;

    fn raw() -> Dataset {
        Dataset::new(vec![
            Column::new(
                "title",
                ColumnType::Object,
                vec![
                    Value::from("A"),
                    Value::from("B"),
                    Value::from("C"),
                    Value::Missing,
                    Value::from("A"),
                ],
            ),
            Column::new(
                "rating",
                ColumnType::Float64,
                vec![
                    Value::Float(8.0),
                    Value::Float(6.0),
                    Value::Missing,
                    Value::Float(7.0),
                    Value::Float(9.0),
                ],
            ),
            Column::new(
                "votes",
                ColumnType::Int64,
                vec![Value::Int(10), Value::Int(20), Value::Int(30), Value::Int(40), Value::Int(50)],
            ),
        ])
        .unwrap()
    }

    fn summarize(raw: &Dataset) -> AnalysisResult {
        let (cleaned, report) = Cleaner::new().clean(raw);
        Aggregator::new().summarize(
            raw,
            &cleaned,
            DatasetInfo::new("movies.csv", raw),
            CleaningSummary {
                report,
                cleaned_csv_path: "movies_cleaned.csv".to_string(),
            },
        )
    }

    #[test]
    fn test_column_info_mixes_raw_and_cleaned() {
        let result = summarize(&raw());

        let rating = &result.column_info[1];
        assert_eq!(rating.name, "rating");
        assert_eq!(rating.dtype, ColumnType::Float64);
        assert_eq!(rating.missing, 1);
        assert_eq!(rating.unique, 5);

        let title = &result.column_info[0];
        assert_eq!(title.missing, 1);
        assert_eq!(title.unique, 3);
    }

    #[test]
    fn test_column_split_and_counts() {
        let result = summarize(&raw());
        assert_eq!(result.stats.numeric_columns, vec!["rating", "votes"]);
        assert_eq!(result.stats.categorical_columns, vec!["title"]);
        assert_eq!(
            result.charts.dtype_counts,
            vec![
                DtypeCount { dtype: "object".to_string(), count: 1 },
                DtypeCount { dtype: "float64".to_string(), count: 1 },
                DtypeCount { dtype: "int64".to_string(), count: 1 },
            ]
        );
        assert_eq!(
            result.charts.categorical_summary["title"],
            vec![
                CategoryCount { name: "A".to_string(), value: 3 },
                CategoryCount { name: "B".to_string(), value: 1 },
                CategoryCount { name: "C".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn test_numeric_summary_rounding() {
        let result = summarize(&raw());
        let rating = &result.stats.numeric_summary["rating"];
        // Missing rating filled with the median 7.5
        assert_eq!(rating.count, 5.0);
        assert_eq!(rating.mean, Some(7.5));
        assert_eq!(rating.std, Some(1.118));
        assert_eq!(rating.median, Some(7.5));

        let json = serde_json::to_value(rating).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]);
    }

    #[test]
    fn test_distributions_and_preview() {
        let result = summarize(&raw());
        assert_eq!(result.charts.numeric_distributions.len(), 2);
        assert_eq!(result.charts.numeric_distributions[0].column, "rating");
        assert_eq!(result.charts.numeric_distributions[0].bins.len(), 8);
        assert_eq!(result.preview.len(), 5);
        assert_eq!(result.preview[3]["title"], json!("A"));
    }

    #[test]
    fn test_cleaning_block_is_flat() {
        let result = summarize(&raw());
        let json = serde_json::to_value(&result.cleaning).unwrap();
        assert_eq!(
            json,
            json!({
                "rows_before": 5,
                "rows_after": 5,
                "missing_before": 2,
                "missing_after": 0,
                "duplicates_removed": 0,
                "cleaned_csv_path": "movies_cleaned.csv"
            })
        );
    }

    #[test]
    fn test_empty_dataset() {
        let raw = Dataset::new(vec![Column::new("x", ColumnType::Float64, vec![])]).unwrap();
        let result = summarize(&raw);
        assert!(result.charts.numeric_distributions.is_empty());
        let x = &result.stats.numeric_summary["x"];
        assert_eq!(x.count, 0.0);
        assert_eq!(x.mean, None);
        assert!(result.preview.is_empty());
    }
}
