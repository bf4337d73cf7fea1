//! Tabsift: cleaning, summaries and recommendations for tabular datasets.
//!
//! Tabsift loads a CSV, TSV, Excel or JSON file, cleans it and derives
//! three views from the cleaned rows: chart-ready summary statistics, a
//! paginated preview and a score-ranked recommendation list.
//!
//! # Pipeline
//!
//! - **Load**: dispatch on file extension, infer a dtype per column
//! - **Clean**: drop duplicate rows, normalize text, impute gaps
//! - **Derive**: summarize, paginate or recommend
//!
//! # Example
//!
//! ```no_run
//! use tabsift::Sift;
//!
//! let sift = Sift::new();
//! let result = sift.analyze("movies.csv").unwrap();
//!
//! println!("Rows: {}", result.dataset.rows);
//! println!("Duplicates removed: {}", result.cleaning.report.duplicates_removed);
//! ```

pub mod analysis;
pub mod error;
pub mod inference;
pub mod input;
pub mod output;
pub mod recommend;
pub mod schema;
pub mod transform;

mod sift;

pub use crate::sift::{Sift, SiftConfig};
pub use analysis::{AnalysisConfig, AnalysisResult};
pub use error::{Result, SiftError};
pub use input::{DatasetFormat, Loader, SourceMetadata};
pub use output::{Page, ToJson, make_json_safe};
pub use recommend::{RecommendQuery, RecommendationResult};
pub use schema::{Column, ColumnType, Dataset, Value};
pub use transform::{Cleaner, CleaningReport};
