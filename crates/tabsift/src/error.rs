//! Error types for the tabsift library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabsift operations.
#[derive(Debug, Error)]
pub enum SiftError {
    /// The dataset file does not exist.
    #[error("Dataset file not found.")]
    FileNotFound(PathBuf),

    /// File extension is not one of the supported dataset formats.
    #[error("Unsupported dataset format.")]
    UnsupportedFormat(String),

    /// A column required by the recommender could not be detected.
    #[error("No {0} column found in the dataset.")]
    MissingColumn(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error opening or reading a spreadsheet.
    #[error("Spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    /// Empty file or no columns to parse.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Malformed content or a failed transformation.
    #[error("{0}")]
    Processing(String),
}

impl SiftError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiftError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tabsift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
