//! Aggregation of cleaned datasets into summaries and chart data.

mod distribution;
mod summary;

pub use distribution::{DistributionBin, NumericDistribution, equal_width_bins};
pub use summary::{
    Aggregator, AnalysisConfig, AnalysisResult, CategoryCount, Charts, CleaningSummary,
    ColumnInfo, DatasetInfo, DtypeCount, MissingCount, NumericSummary, Stats,
};
