//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabsift: clean, summarize and rank tabular datasets
#[derive(Parser)]
#[command(name = "tabsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a dataset and write its cleaned copy
    Analyze {
        /// Path to the dataset (CSV/TSV/TXT/XLS/XLSX/JSON/JSONL)
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Show one page of cleaned rows
    CleanedPreview {
        /// Path to the dataset
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Page number, starting at 1
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Rows per page
        #[arg(long = "page_size", alias = "page-size", default_value = "10", allow_negative_numbers = true)]
        page_size: i64,
    },

    /// Rank dataset titles by score
    Recommend {
        /// Path to the dataset
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Number of recommendations
        #[arg(long = "top_n", alias = "top-n", default_value = "12", allow_negative_numbers = true)]
        top_n: i64,

        /// Language filter (hindi, english, telugu, tamil, malayalam, kannada or all)
        #[arg(long, default_value = "all")]
        language: String,

        /// Genre filter (e.g. drama, "science fiction", or all)
        #[arg(long, default_value = "all")]
        genre: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaned_preview_defaults() {
        let cli = Cli::try_parse_from(["tabsift", "cleaned-preview", "--file", "a.csv"]).unwrap();
        match cli.command {
            Commands::CleanedPreview { file, page, page_size } => {
                assert_eq!(file, PathBuf::from("a.csv"));
                assert_eq!(page, 1);
                assert_eq!(page_size, 10);
            }
            _ => panic!("expected cleaned-preview"),
        }
    }

    #[test]
    fn test_recommend_flags() {
        let cli = Cli::try_parse_from([
            "tabsift",
            "recommend",
            "--file",
            "m.csv",
            "--top_n",
            "5",
            "--language",
            "Hindi",
            "--genre",
            "science fiction",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Recommend { top_n, language, genre, .. } => {
                assert_eq!(top_n, 5);
                assert_eq!(language, "Hindi");
                assert_eq!(genre, "science fiction");
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_negative_page_is_accepted() {
        let cli = Cli::try_parse_from([
            "tabsift",
            "cleaned-preview",
            "--file",
            "a.csv",
            "--page",
            "-3",
            "--page_size",
            "0",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::CleanedPreview { page: -3, page_size: 0, .. }));
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["tabsift", "analyze"]).is_err());
    }
}
