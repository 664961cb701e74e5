//! # News Scrub
//!
//! A cleaning and validation pipeline for scraped news-article datasets.
//! Scrapers leave HTML residue, encoding artifacts, inconsistent date
//! formats, and site-specific boilerplate in the records they emit; this
//! application normalizes each record to plain text and classifies it as
//! acceptable or rejected before it enters the downstream corpus.
//!
//! ## Usage
//!
//! ```sh
//! news_scrub -i ./scraped/2025-05-06.json -o ./out
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Load**: Read the scraped dataset JSON from disk
//! 2. **Clean**: Normalize title/content text and trim URLs, per record
//! 3. **Validate**: Check required fields, URL shape, and content length
//! 4. **Output**: Write the cleaned dataset and a per-record verdict report
//!
//! Record-level problems never abort the run; they become report content.
//! The process fails only on I/O errors or a dataset that is not valid JSON.

use clap::Parser;
use itertools::Itertools;
use serde_json::Value;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cleaning;
mod cli;
mod models;
mod outputs;
mod utils;
mod validate;

use cleaning::dates::standardize_date;
use cli::Cli;
use models::Dataset;
use outputs::json;
use utils::{ensure_writable_dir, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_scrub starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.input, ?args.output_dir, args.min_content_length, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before doing any work
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Load dataset ----
    let raw = match tokio::fs::read_to_string(&args.input).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(path = %args.input, error = %e, "Failed to read input dataset");
            return Err(e.into());
        }
    };
    let dataset: Dataset = match serde_json::from_str(&raw) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(path = %args.input, error = %e, "Input is not a valid dataset JSON");
            return Err(e.into());
        }
    };
    info!(
        count = dataset.articles.len(),
        generated_at = %dataset.generated_at,
        "Loaded dataset"
    );

    // ---- Clean records ----
    let mut cleaned = cleaning::clean_dataset(&dataset);
    info!(count = cleaned.articles.len(), "Cleaned records");

    // ---- Optional published-date standardization ----
    if args.standardize_dates {
        let mut unparseable = 0usize;
        for article in &mut cleaned.articles {
            if let Some(published) = &article.published {
                let text = published.as_str().unwrap_or("");
                let standardized = standardize_date(text);
                if standardized.is_empty() && !text.trim().is_empty() {
                    unparseable += 1;
                }
                article.published = Some(Value::String(standardized));
            }
        }
        if unparseable > 0 {
            warn!(
                count = unparseable,
                "published dates matched no known format and were emptied"
            );
        } else {
            info!("Standardized published dates");
        }
    }

    // ---- Validate records ----
    let verdicts = validate::validate_records(&cleaned.articles, args.min_content_length);
    let valid_count = verdicts.iter().filter(|v| v.is_valid).count();
    let invalid_count = verdicts.len() - valid_count;
    info!(
        total = verdicts.len(),
        valid = valid_count,
        invalid = invalid_count,
        "Validated records"
    );

    for verdict in verdicts.iter().filter(|v| !v.is_valid) {
        let title = verdict
            .record
            .title
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or("(untitled)");
        warn!(
            title = %truncate_for_log(title, 80),
            reasons = ?verdict.reasons,
            "Record rejected"
        );
    }

    // Reason histogram, most frequent first
    let reason_counts = verdicts.iter().flat_map(|v| v.reasons.iter()).counts();
    for (reason, count) in reason_counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
    {
        info!(%reason, count, "Rejection reason");
    }

    // ---- Write outputs ----
    json::write_cleaned(&cleaned, &args.output_dir).await?;
    json::write_report(&cleaned.generated_at, &verdicts, &args.output_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        records = verdicts.len(),
        valid = valid_count,
        invalid = invalid_count,
        "Execution complete"
    );

    Ok(())
}
