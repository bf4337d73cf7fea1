//! Cleaning transformations applied to raw datasets.

mod cleaner;

pub use cleaner::{Cleaner, CleanerConfig, CleaningReport};
