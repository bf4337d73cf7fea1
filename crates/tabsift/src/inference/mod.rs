//! Type inference and statistical analysis.

pub mod dtype;
pub mod statistical;

pub use dtype::{column_from_tokens, column_from_values, infer_column_type, is_na_token, parse_token};
pub use statistical::{Describe, describe, median, mode, round_to, value_counts};
