//! Data source metadata.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Detected format (csv, tsv, excel, json, jsonl).
    pub format: String,
    /// Encoding the text was decoded with (`binary` for spreadsheets).
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: &Path,
        format: impl Into<String>,
        encoding: impl Into<String>,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path: path.to_path_buf(),
            format: format.into(),
            encoding: encoding.into(),
            row_count,
            column_count,
        }
    }
}

/// Make header names unique and non-empty.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `.1`, `.2`, ...
/// suffixes in order of appearance.
pub fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::with_capacity(headers.len());

    for (idx, header) in headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        result.push(name);
    }

    result
}
