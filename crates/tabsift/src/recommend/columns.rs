//! Auto-detection of the columns the recommender reads.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};
use crate::schema::Dataset;

pub const TITLE_CANDIDATES: &[&str] = &["title", "movie_title", "name"];
pub const RATING_CANDIDATES: &[&str] = &["imdb_rating", "vote_average", "rating", "score"];
pub const VOTE_COUNT_CANDIDATES: &[&str] = &["vote_count", "votes", "rating_count"];
pub const LANGUAGE_CANDIDATES: &[&str] = &["original_language", "spoken_languages", "language", "lang"];
pub const GENRE_CANDIDATES: &[&str] = &["genres", "genre", "category"];
pub const RELEASE_CANDIDATES: &[&str] = &["release_date", "year", "release_year"];
pub const POPULARITY_CANDIDATES: &[&str] = &["popularity"];

/// Find the first candidate present in the dataset, ignoring case.
///
/// Returns the column's actual name. When several columns differ only in
/// case, the last one is used.
pub fn pick_column(dataset: &Dataset, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        dataset
            .columns()
            .iter()
            .rev()
            .find(|column| column.name.to_lowercase() == *candidate)
            .map(|column| column.name.clone())
    })
}

/// Columns found for each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedColumns {
    pub title: String,
    pub rating: Option<String>,
    pub vote_count: Option<String>,
    pub language: Option<String>,
    pub genre: Option<String>,
    pub release: Option<String>,
    pub popularity: Option<String>,
}

impl DetectedColumns {
    /// Detect every role. A title column is required.
    pub fn detect(dataset: &Dataset) -> Result<Self> {
        let title = pick_column(dataset, TITLE_CANDIDATES)
            .ok_or_else(|| SiftError::MissingColumn("title".to_string()))?;

        Ok(Self {
            title,
            rating: pick_column(dataset, RATING_CANDIDATES),
            vote_count: pick_column(dataset, VOTE_COUNT_CANDIDATES),
            language: pick_column(dataset, LANGUAGE_CANDIDATES),
            genre: pick_column(dataset, GENRE_CANDIDATES),
            release: pick_column(dataset, RELEASE_CANDIDATES),
            popularity: pick_column(dataset, POPULARITY_CANDIDATES),
        })
    }
}
