//! Cleaned-preview command - one page of cleaned rows.

use std::path::PathBuf;

use tabsift::{Sift, make_json_safe};
use tracing::debug;

use super::CommandResult;

pub fn run(file: PathBuf, page: i64, page_size: i64) -> CommandResult {
    debug!(file = %file.display(), page, page_size, "cleaned preview");
    let page = Sift::new().cleaned_preview(&file, page, page_size)?;
    Ok(make_json_safe(&serde_json::to_value(&page)?))
}
