//! Recommend command - score-ranked titles with language/genre filters.

use std::path::PathBuf;

use tabsift::{RecommendQuery, Sift, make_json_safe};
use tracing::debug;

use super::CommandResult;

pub fn run(file: PathBuf, top_n: i64, language: String, genre: String) -> CommandResult {
    debug!(file = %file.display(), top_n, %language, %genre, "recommend");

    // A negative count asks for nothing
    let query = RecommendQuery {
        top_n: usize::try_from(top_n).unwrap_or(0),
        language,
        genre,
    };
    let result = Sift::new().recommend(&file, &query)?;
    Ok(make_json_safe(&serde_json::to_value(&result)?))
}
