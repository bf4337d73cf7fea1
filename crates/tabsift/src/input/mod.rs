//! Input parsing and data source handling.

mod loader;
mod records;
mod source;
mod spreadsheet;

pub use loader::{DatasetFormat, Loader, LoaderConfig, parse_delimited};
pub use records::{parse_json, parse_json_lines};
pub use source::{SourceMetadata, unique_headers};
pub use spreadsheet::read_first_sheet;
