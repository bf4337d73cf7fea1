//! Heuristic recommendations from a cleaned dataset.
//!
//! Titles are scored from a detected rating (or popularity) column, tagged
//! with a canonical language and genre, restricted to recent release years
//! and ranked by score and vote count.

mod columns;
mod ranker;
mod release;
mod vocabulary;

pub use columns::{DetectedColumns, pick_column};
pub use ranker::{
    FilterOptions, ModelInfo, RecommendConfig, RecommendQuery, RecommendationItem,
    RecommendationResult, Recommender,
};
pub use release::{parse_year, release_year};
pub use vocabulary::{
    GENRES, LANGUAGES, canonical_genre, canonical_language, genre_options, language_options,
};
