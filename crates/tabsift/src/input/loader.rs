//! Dataset loading with format dispatch and encoding fallback.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, warn};

use crate::error::{Result, SiftError};
use crate::inference::column_from_tokens;
use crate::schema::Dataset;

use super::records::{parse_json, parse_json_lines};
use super::source::{SourceMetadata, unique_headers};
use super::spreadsheet::read_first_sheet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Supported dataset formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// `.csv` and `.txt`: comma-delimited text.
    Csv,
    /// `.tsv`: tab-delimited text.
    Tsv,
    /// `.xls` and `.xlsx`.
    Excel,
    /// `.json`: array of records.
    Json,
    /// `.jsonl`: one record per line.
    JsonLines,
}

impl DatasetFormat {
    /// Pick the format from the (case-insensitive) file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(DatasetFormat::Csv),
            "tsv" => Ok(DatasetFormat::Tsv),
            "xls" | "xlsx" => Ok(DatasetFormat::Excel),
            "json" => Ok(DatasetFormat::Json),
            "jsonl" => Ok(DatasetFormat::JsonLines),
            _ => Err(SiftError::UnsupportedFormat(ext)),
        }
    }

    /// Short name used in metadata.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => "csv",
            DatasetFormat::Tsv => "tsv",
            DatasetFormat::Excel => "excel",
            DatasetFormat::Json => "json",
            DatasetFormat::JsonLines => "jsonl",
        }
    }

    fn delimiter(&self) -> Option<u8> {
        match self {
            DatasetFormat::Csv => Some(b','),
            DatasetFormat::Tsv => Some(b'\t'),
            _ => None,
        }
    }
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Encoding label used when text is not valid UTF-8.
    pub fallback_encoding: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fallback_encoding: "latin1".to_string(),
        }
    }
}

/// Loads dataset files into a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the dataset and its metadata.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SiftError::FileNotFound(path.to_path_buf()));
        }

        let format = DatasetFormat::from_path(path)?;
        debug!(path = %path.display(), format = format.name(), "loading dataset");

        let (dataset, encoding) = match format {
            DatasetFormat::Excel => (read_first_sheet(path)?, "binary".to_string()),
            _ => {
                let bytes = fs::read(path).map_err(|e| SiftError::io(path, e))?;
                let (text, encoding) = self.decode(&bytes)?;
                let dataset = match format {
                    DatasetFormat::Json => parse_json(&text)?,
                    DatasetFormat::JsonLines => parse_json_lines(&text)?,
                    _ => parse_delimited(&text, format.delimiter().unwrap_or(b','))?,
                };
                (dataset, encoding)
            }
        };

        let metadata = SourceMetadata::new(
            path,
            format.name(),
            encoding,
            dataset.row_count(),
            dataset.column_count(),
        );
        debug!(
            rows = metadata.row_count,
            columns = metadata.column_count,
            "dataset loaded"
        );

        Ok((dataset, metadata))
    }

    /// Decode as UTF-8, falling back to the configured single-byte encoding.
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<(Cow<'a, str>, String)> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        match std::str::from_utf8(bytes) {
            Ok(text) => Ok((Cow::Borrowed(text), "utf-8".to_string())),
            Err(e) => {
                let encoding = Encoding::for_label(self.config.fallback_encoding.as_bytes())
                    .ok_or_else(|| {
                        SiftError::Processing(format!(
                            "Unknown fallback encoding '{}'",
                            self.config.fallback_encoding
                        ))
                    })?;
                warn!(
                    error = %e,
                    fallback = encoding.name(),
                    "input is not valid UTF-8, retrying with fallback encoding"
                );
                let (text, _) = encoding.decode_without_bom_handling(bytes);
                Ok((text, encoding.name().to_lowercase()))
            }
        }
    }
}

/// Parse delimited text with a header row.
///
/// Short rows are padded with missing cells; rows with more fields than the
/// header are rejected.
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(SiftError::EmptyData(
            "No columns to parse from file".to_string(),
        ));
    }
    let headers = unique_headers(headers);
    let expected_cols = headers.len();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); expected_cols];
    for result in reader.records() {
        let record = result?;
        if record.len() > expected_cols {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(SiftError::Processing(format!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                expected_cols,
                line,
                record.len()
            )));
        }

        for (idx, cells) in columns.iter_mut().enumerate() {
            cells.push(record.get(idx).unwrap_or("").to_string());
        }
    }

    Dataset::new(
        headers
            .into_iter()
            .zip(columns)
            .map(|(name, tokens)| column_from_tokens(name, tokens))
            .collect(),
    )
}
