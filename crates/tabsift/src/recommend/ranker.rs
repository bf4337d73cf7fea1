//! Score-based ranking of dataset titles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::inference::round_to;
use crate::schema::{Dataset, Value};

use super::columns::DetectedColumns;
use super::release::release_year;
use super::vocabulary::{
    ALL, OTHER_LANGUAGE, UNKNOWN_GENRE, canonical_genre, canonical_language, genre_options,
    language_options, normalize_filter,
};

/// Query label reported with every result.
pub const TOP_RATED_QUERY: &str = "top_rated";

/// Source label of every recommendation.
pub const DATASET_SOURCE: &str = "dataset";

const RESULT_MESSAGE: &str = "Top-rated recommendations generated from uploaded dataset.";

/// Recommender configuration.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Earliest release year kept.
    pub min_year: i32,
    /// Latest release year kept.
    pub max_year: i32,
    /// Minimum size of the ranked candidate list.
    pub candidate_floor: usize,
    /// Candidates kept per requested recommendation.
    pub candidate_multiplier: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_year: 2000,
            max_year: 2026,
            candidate_floor: 100,
            candidate_multiplier: 5,
        }
    }
}

/// What to recommend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendQuery {
    /// Number of recommendations to return.
    pub top_n: usize,
    /// Canonical language, or `all`.
    pub language: String,
    /// Canonical genre, or `all`.
    pub genre: String,
}

impl Default for RecommendQuery {
    fn default() -> Self {
        Self {
            top_n: 12,
            language: ALL.to_string(),
            genre: ALL.to_string(),
        }
    }
}

/// One recommended title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub title: String,
    /// Score rounded to 2 decimals.
    pub score: f64,
    pub language: String,
    pub genre: String,
    pub source: String,
    pub year: Option<i32>,
}

/// Filter values a caller can choose from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub languages: Vec<String>,
    pub genres: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            languages: language_options(),
            genres: genre_options(),
        }
    }
}

/// Diagnostics about how the ranking was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Rows in the cleaned dataset.
    pub rows_used: usize,
    pub title_column: String,
    pub rating_column: Option<String>,
    pub vote_count_column: Option<String>,
    pub language_column: Option<String>,
    pub genre_column: Option<String>,
    pub release_column: Option<String>,
    /// Candidates ranked before the final cut.
    pub dataset_count: usize,
    pub returned_count: usize,
}

/// Full recommender output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub query: String,
    pub language: String,
    pub genre: String,
    pub recommendations: Vec<RecommendationItem>,
    pub filter_options: FilterOptions,
    pub message: String,
    pub model_info: ModelInfo,
}

/// A row prepared for ranking.
#[derive(Debug, Clone)]
struct Candidate {
    title: String,
    score: f64,
    vote_count: i64,
    language: &'static str,
    genre: &'static str,
    year: Option<i32>,
}

/// Ranks titles of a cleaned dataset.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommendConfig,
}

impl Recommender {
    /// Create a recommender with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recommender with custom configuration.
    pub fn with_config(config: RecommendConfig) -> Self {
        Self { config }
    }

    /// Rank the titles of a cleaned dataset.
    ///
    /// Fails with [`SiftError::MissingColumn`](crate::SiftError::MissingColumn)
    /// when no title column can be found.
    pub fn recommend(&self, cleaned: &Dataset, query: &RecommendQuery) -> Result<RecommendationResult> {
        let columns = DetectedColumns::detect(cleaned)?;
        debug!(?columns, "detected recommender columns");

        let language = normalize_filter(&query.language);
        let genre = normalize_filter(&query.genre);

        let mut candidates: Vec<Candidate> = self
            .candidates(cleaned, &columns)
            .into_iter()
            .filter(|c| self.year_in_range(c.year))
            .filter(|c| language == ALL || c.language == language)
            .filter(|c| genre == ALL || c.genre == genre)
            .collect();

        // Stable, so equal keys keep dataset order
        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.vote_count.cmp(&a.vote_count))
        });

        let limit = query
            .top_n
            .saturating_mul(self.config.candidate_multiplier)
            .max(self.config.candidate_floor);
        let mut seen = HashSet::new();
        let ranked: Vec<RecommendationItem> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.title.to_lowercase()))
            .take(limit)
            .map(|c| RecommendationItem {
                title: c.title,
                score: round_to(c.score, 2),
                language: c.language.to_string(),
                genre: c.genre.to_string(),
                source: DATASET_SOURCE.to_string(),
                year: c.year,
            })
            .collect();

        let dataset_count = ranked.len();
        let recommendations: Vec<RecommendationItem> = ranked.into_iter().take(query.top_n).collect();
        info!(
            candidates = dataset_count,
            returned = recommendations.len(),
            language = %language,
            genre = %genre,
            "recommendations ranked"
        );

        Ok(RecommendationResult {
            query: TOP_RATED_QUERY.to_string(),
            language,
            genre,
            filter_options: FilterOptions::default(),
            message: RESULT_MESSAGE.to_string(),
            model_info: ModelInfo {
                rows_used: cleaned.row_count(),
                title_column: columns.title,
                rating_column: columns.rating,
                vote_count_column: columns.vote_count,
                language_column: columns.language,
                genre_column: columns.genre,
                release_column: columns.release,
                dataset_count,
                returned_count: recommendations.len(),
            },
            recommendations,
        })
    }

    fn year_in_range(&self, year: Option<i32>) -> bool {
        match year {
            None => true,
            Some(y) => (self.config.min_year..=self.config.max_year).contains(&y),
        }
    }

    /// One candidate per row with a non-empty title.
    fn candidates(&self, cleaned: &Dataset, columns: &DetectedColumns) -> Vec<Candidate> {
        let titles = column_cells(cleaned, Some(&columns.title)).unwrap_or_default();
        // Popularity only stands in when there is no rating column
        let scores = column_cells(cleaned, columns.rating.as_deref())
            .or_else(|| column_cells(cleaned, columns.popularity.as_deref()));
        let votes = column_cells(cleaned, columns.vote_count.as_deref());
        let languages = column_cells(cleaned, columns.language.as_deref());
        let genres = column_cells(cleaned, columns.genre.as_deref());
        let releases = column_cells(cleaned, columns.release.as_deref());

        titles
            .iter()
            .enumerate()
            .filter_map(|(row, title)| {
                let title = title.to_text().trim().to_string();
                if title.is_empty() {
                    return None;
                }

                Some(Candidate {
                    title,
                    score: cell(scores, row).and_then(Value::as_f64).unwrap_or(0.0),
                    vote_count: cell(votes, row)
                        .and_then(Value::as_f64)
                        .map(|v| v as i64)
                        .unwrap_or(0),
                    language: cell(languages, row)
                        .map(|v| canonical_language(&v.to_text()))
                        .unwrap_or(OTHER_LANGUAGE),
                    genre: cell(genres, row)
                        .map(|v| canonical_genre(&v.to_text()))
                        .unwrap_or(UNKNOWN_GENRE),
                    year: cell(releases, row).and_then(release_year),
                })
            })
            .collect()
    }
}

fn column_cells<'a>(dataset: &'a Dataset, name: Option<&str>) -> Option<&'a [Value]> {
    name.and_then(|n| dataset.column(n))
        .map(|c| c.values.as_slice())
}

fn cell(cells: Option<&[Value]>, row: usize) -> Option<&Value> {
    cells.and_then(|c| c.get(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, ColumnType};

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| Value::from(*v)).collect()
    }

    fn movies() -> Dataset {
        Dataset::new(vec![
            Column::new("title", ColumnType::Object, text(&["A", "B"])),
            Column::new(
                "imdb_rating",
                ColumnType::Float64,
                vec![Value::Float(8.1), Value::Float(9.0)],
            ),
            Column::new("original_language", ColumnType::Object, text(&["en", "Hindi"])),
            Column::new("genres", ColumnType::Object, text(&["Action, Drama", "Drama"])),
            Column::new("release_date", ColumnType::Object, text(&["2021-05-01", "2019-03-10"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_ranks_by_score() {
        let result = Recommender::new()
            .recommend(&movies(), &RecommendQuery::default())
            .unwrap();

        assert_eq!(result.query, "top_rated");
        assert_eq!(result.recommendations.len(), 2);

        let first = &result.recommendations[0];
        assert_eq!(first.title, "B");
        assert_eq!(first.score, 9.0);
        assert_eq!(first.language, "hindi");
        assert_eq!(first.genre, "drama");
        assert_eq!(first.year, Some(2019));
        assert_eq!(first.source, "dataset");

        let second = &result.recommendations[1];
        assert_eq!(second.title, "A");
        assert_eq!(second.score, 8.1);
        assert_eq!(second.language, "english");
        assert_eq!(second.genre, "action");
        assert_eq!(second.year, Some(2021));

        assert_eq!(result.model_info.title_column, "title");
        assert_eq!(result.model_info.rating_column.as_deref(), Some("imdb_rating"));
        assert_eq!(result.model_info.vote_count_column, None);
        assert_eq!(result.model_info.dataset_count, 2);
        assert_eq!(result.model_info.returned_count, 2);
    }

    #[test]
    fn test_filters() {
        let query = RecommendQuery {
            language: " English ".to_string(),
            ..RecommendQuery::default()
        };
        let result = Recommender::new().recommend(&movies(), &query).unwrap();
        assert_eq!(result.language, "english");
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].title, "A");

        let query = RecommendQuery {
            genre: "comedy".to_string(),
            ..RecommendQuery::default()
        };
        let result = Recommender::new().recommend(&movies(), &query).unwrap();
        assert!(result.recommendations.is_empty());
        assert_eq!(result.filter_options.genres.len(), 26);
    }

    #[test]
    fn test_vote_count_breaks_ties_and_titles_dedupe() {
        let ds = Dataset::new(vec![
            Column::new("Name", ColumnType::Object, text(&["x", "Y", "y ", "z"])),
            Column::new(
                "score",
                ColumnType::Float64,
                vec![Value::Float(7.0), Value::Float(7.0), Value::Float(7.5), Value::Float(7.0)],
            ),
            Column::new(
                "votes",
                ColumnType::Float64,
                vec![Value::Float(10.0), Value::Float(99.9), Value::Float(1.0), Value::Float(10.0)],
            ),
        ])
        .unwrap();

        let result = Recommender::new().recommend(&ds, &RecommendQuery::default()).unwrap();
        let titles: Vec<&str> = result.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["y", "x", "z"]);
        assert_eq!(result.recommendations[0].language, "other");
        assert_eq!(result.recommendations[0].genre, "unknown");
        assert_eq!(result.recommendations[0].year, None);
    }

    #[test]
    fn test_year_window() {
        let ds = Dataset::new(vec![
            Column::new("title", ColumnType::Object, text(&["old", "new", "undated", "future"])),
            Column::new(
                "year",
                ColumnType::Object,
                text(&["1995", "2010", "Unknown", "2031"]),
            ),
        ])
        .unwrap();

        let result = Recommender::new().recommend(&ds, &RecommendQuery::default()).unwrap();
        let titles: Vec<&str> = result.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "undated"]);
    }

    #[test]
    fn test_popularity_fallback_and_top_n() {
        let ds = Dataset::new(vec![
            Column::new("title", ColumnType::Object, text(&["a", "b", "c"])),
            Column::new(
                "popularity",
                ColumnType::Float64,
                vec![Value::Float(1.234), Value::Float(50.556), Value::Float(3.0)],
            ),
        ])
        .unwrap();

        let query = RecommendQuery {
            top_n: 2,
            ..RecommendQuery::default()
        };
        let result = Recommender::new().recommend(&ds, &query).unwrap();
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].title, "b");
        assert_eq!(result.recommendations[0].score, 50.56);
        assert_eq!(result.model_info.dataset_count, 3);
        assert_eq!(result.model_info.returned_count, 2);
    }

    #[test]
    fn test_missing_title_column() {
        let ds = Dataset::new(vec![Column::new("rating", ColumnType::Float64, vec![])]).unwrap();
        let err = Recommender::new()
            .recommend(&ds, &RecommendQuery::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "No title column found in the dataset.");
    }

    #[test]
    fn test_output_field_order() {
        let result = Recommender::new()
            .recommend(&movies(), &RecommendQuery::default())
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["query", "language", "genre", "recommendations", "filter_options", "message", "model_info"]
        );
        let item: Vec<&String> = json["recommendations"][0].as_object().unwrap().keys().collect();
        assert_eq!(item, vec!["title", "score", "language", "genre", "source", "year"]);
    }
}
