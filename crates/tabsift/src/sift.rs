//! Main Sift struct and public API.

use std::path::Path;

use tracing::info;

use crate::analysis::{Aggregator, AnalysisConfig, AnalysisResult, CleaningSummary, DatasetInfo};
use crate::error::Result;
use crate::input::{Loader, LoaderConfig};
use crate::output::{Page, cleaned_csv_path, paginate, write_csv};
use crate::recommend::{RecommendConfig, RecommendQuery, RecommendationResult, Recommender};
use crate::schema::Dataset;
use crate::transform::{Cleaner, CleanerConfig, CleaningReport};

/// Configuration for every pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct SiftConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Cleaner configuration.
    pub cleaner: CleanerConfig,
    /// Summary limits.
    pub analysis: AnalysisConfig,
    /// Recommender configuration.
    pub recommend: RecommendConfig,
}

/// Loads, cleans and summarizes dataset files.
pub struct Sift {
    loader: Loader,
    cleaner: Cleaner,
    aggregator: Aggregator,
    recommender: Recommender,
}

impl Sift {
    /// Create a new Sift instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SiftConfig::default())
    }

    /// Create a Sift instance with custom configuration.
    pub fn with_config(config: SiftConfig) -> Self {
        Self {
            loader: Loader::with_config(config.loader),
            cleaner: Cleaner::with_config(config.cleaner),
            aggregator: Aggregator::with_config(config.analysis),
            recommender: Recommender::with_config(config.recommend),
        }
    }

    /// Load and clean a file, returning the raw and cleaned datasets.
    pub fn load_clean(&self, path: impl AsRef<Path>) -> Result<(Dataset, Dataset, CleaningReport)> {
        let (raw, _) = self.loader.load(path)?;
        let (cleaned, report) = self.cleaner.clean(&raw);
        Ok((raw, cleaned, report))
    }

    /// Summarize a file and write its cleaned copy to
    /// `<dir>/<stem>_cleaned.csv`.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = path.as_ref();

        let (raw, source) = self.loader.load(path)?;
        let (cleaned, report) = self.cleaner.clean(&raw);

        let cleaned_path = cleaned_csv_path(path);
        write_csv(&cleaned, &cleaned_path)?;
        info!(path = %cleaned_path.display(), "cleaned copy written");

        Ok(self.aggregator.summarize(
            &raw,
            &cleaned,
            DatasetInfo::new(source.file, &raw),
            CleaningSummary {
                report,
                cleaned_csv_path: cleaned_path.to_string_lossy().into_owned(),
            },
        ))
    }

    /// One page of the cleaned rows of a file.
    pub fn cleaned_preview(&self, path: impl AsRef<Path>, page: i64, page_size: i64) -> Result<Page> {
        let (_, cleaned, _) = self.load_clean(path)?;
        Ok(paginate(&cleaned, page, page_size))
    }

    /// Ranked recommendations from the cleaned rows of a file.
    pub fn recommend(&self, path: impl AsRef<Path>, query: &RecommendQuery) -> Result<RecommendationResult> {
        let (_, cleaned, _) = self.load_clean(path)?;
        self.recommender.recommend(&cleaned, query)
    }
}

impl Default for Sift {
    fn default() -> Self {
        Self::new()
    }
}
