//! Row previews and pagination of cleaned data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::schema::{Dataset, Value};

use super::json::ToJson;

/// Default maximum characters of a text cell in previews.
pub const DEFAULT_MAX_CHARS: usize = 160;

const ELLIPSIS: &str = "...";

/// A row as an ordered field-name-to-value mapping.
pub type Record = IndexMap<String, JsonValue>;

/// Convert a cell for preview display, shortening long text.
///
/// Text longer than `max_chars` is cut so that, with the trailing `...`,
/// it is exactly `max_chars` characters long.
pub fn truncate_cell(value: &Value, max_chars: usize) -> JsonValue {
    match value {
        Value::Text(s) if s.chars().count() > max_chars => {
            let keep = max_chars.saturating_sub(ELLIPSIS.len());
            let mut short: String = s.chars().take(keep).collect();
            short.push_str(ELLIPSIS);
            JsonValue::String(short)
        }
        other => other.to_json(),
    }
}

/// Convert rows `[start, end)` to records, optionally truncating text.
fn records(dataset: &Dataset, start: usize, end: usize, max_chars: Option<usize>) -> Vec<Record> {
    let end = end.min(dataset.row_count());
    (start.min(end)..end)
        .map(|row| {
            dataset
                .columns()
                .iter()
                .map(|column| {
                    let cell = &column.values[row];
                    let json = match max_chars {
                        Some(limit) => truncate_cell(cell, limit),
                        None => cell.to_json(),
                    };
                    (column.name.clone(), json)
                })
                .collect()
        })
        .collect()
}

/// The first `n` rows with long text truncated and missing cells as null.
pub fn frame_preview(dataset: &Dataset, n: usize, max_chars: usize) -> Vec<Record> {
    records(dataset, 0, n, Some(max_chars))
}

/// One page of cleaned rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number after clamping (1-based).
    pub page: usize,
    /// Page size after clamping.
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

/// Slice a page out of the dataset.
///
/// `page_size` is raised to at least 1 and `page` is clamped into
/// `[1, total_pages]`, where an empty dataset still has one page.
pub fn paginate(dataset: &Dataset, page: i64, page_size: i64) -> Page {
    let total_rows = dataset.row_count();
    let page_size = page_size.max(1) as usize;
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = (page.max(1) as usize).min(total_pages);

    let start = (page - 1) * page_size;
    let end = start + page_size;

    Page {
        page,
        page_size,
        total_rows,
        total_pages,
        columns: dataset
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        rows: records(dataset, start, end, None),
    }
}
