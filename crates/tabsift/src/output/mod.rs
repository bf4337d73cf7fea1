//! Output shaping: JSON-safe conversion, previews, pagination and the
//! cleaned CSV copy.

mod csv;
mod json;
mod preview;

pub use self::csv::{CLEANED_SUFFIX, cleaned_csv_path, write_csv};
pub use json::{ToJson, make_json_safe};
pub use preview::{DEFAULT_MAX_CHARS, Page, Record, frame_preview, paginate, truncate_cell};
