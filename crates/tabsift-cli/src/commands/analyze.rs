//! Analyze command - summary statistics and chart data for a dataset.

use std::path::PathBuf;

use tabsift::{Sift, make_json_safe};
use tracing::debug;

use super::CommandResult;

pub fn run(file: PathBuf) -> CommandResult {
    debug!(file = %file.display(), "analyze");
    let result = Sift::new().analyze(&file)?;
    Ok(make_json_safe(&serde_json::to_value(&result)?))
}
