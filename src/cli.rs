//! Command-line interface definitions for News Scrub.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment
//! variables.

use clap::Parser;

use crate::validate::DEFAULT_MIN_CONTENT_LENGTH;

/// Command-line arguments for the News Scrub application.
///
/// # Examples
///
/// ```sh
/// # Clean and validate a scraped dataset
/// news_scrub -i ./scraped/2025-05-06.json -o ./out
///
/// # Tighten the content-length threshold
/// news_scrub -i ./scraped/2025-05-06.json -o ./out --min-content-length 300
///
/// # Also rewrite published dates to YYYY-MM-DD
/// news_scrub -i ./scraped/2025-05-06.json -o ./out --standardize-dates
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the scraped dataset JSON file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the cleaned dataset and validation report
    #[arg(short, long)]
    pub output_dir: String,

    /// Minimum cleaned content length (in characters) for a record to be accepted
    #[arg(long, env = "MIN_CONTENT_LENGTH", default_value_t = DEFAULT_MIN_CONTENT_LENGTH)]
    pub min_content_length: usize,

    /// Rewrite `published` values to YYYY-MM-DD after cleaning (unrecognized
    /// formats become empty strings and are counted in the logs)
    #[arg(long)]
    pub standardize_dates: bool,
}
