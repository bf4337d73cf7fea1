//! CLI command implementations.
//!
//! Each command returns the JSON document to print on success.

pub mod analyze;
pub mod cleaned_preview;
pub mod recommend;

/// Result of a command: the JSON document or the error to report.
pub type CommandResult = Result<serde_json::Value, Box<dyn std::error::Error>>;
