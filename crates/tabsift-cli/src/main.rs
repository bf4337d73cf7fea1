//! Tabsift CLI - dataset cleaning, summaries and recommendations.
//!
//! Every command prints exactly one JSON document on stdout. Failures print
//! `{"error": "<message>"}` and exit with status 1. Logs go to stderr.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use serde_json::json;

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze { file } => commands::analyze::run(file),

        Commands::CleanedPreview {
            file,
            page,
            page_size,
        } => commands::cleaned_preview::run(file, page, page_size),

        Commands::Recommend {
            file,
            top_n,
            language,
            genre,
        } => commands::recommend::run(file, top_n, language, genre),
    };

    match result {
        Ok(document) => println!("{}", document),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            println!("{}", json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}
