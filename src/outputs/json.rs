//! JSON output generation for cleaned datasets and validation reports.
//!
//! This module serializes the pipeline's results for consumption by the
//! downstream dataset builder and by humans auditing a scrape run.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── cleaned.json   # The cleaned Dataset, same shape as the input
//! └── report.json    # Summary counts plus one verdict per record
//! ```

use crate::models::{Dataset, RecordVerdict};
use serde::Serialize;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// The validation report as written to `report.json`.
///
/// Summary counts first, then one entry per record in input order so report
/// lines can be matched back to the dataset by position.
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    /// The `generated_at` of the dataset this report describes.
    pub generated_at: &'a str,
    /// Total records validated.
    pub total: usize,
    /// Records that passed every check.
    pub valid: usize,
    /// Records rejected with at least one reason.
    pub invalid: usize,
    /// Per-record verdicts, in input order.
    pub records: &'a [RecordVerdict],
}

/// Write the cleaned dataset to `{output_dir}/cleaned.json`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_cleaned(dataset: &Dataset, output_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(dataset)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/cleaned.json", output_dir.trim_end_matches('/'));
    info!(path = %path, "Writing cleaned dataset");
    fs::write(&path, json).await?;
    info!(path = %path, count = dataset.articles.len(), "Wrote cleaned dataset");

    Ok(())
}

/// Write the validation report to `{output_dir}/report.json`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_report(
    generated_at: &str,
    verdicts: &[RecordVerdict],
    output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let valid = verdicts.iter().filter(|v| v.is_valid).count();
    let report = ValidationReport {
        generated_at,
        total: verdicts.len(),
        valid,
        invalid: verdicts.len() - valid,
        records: verdicts,
    };
    let json = serde_json::to_string(&report)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/report.json", output_dir.trim_end_matches('/'));
    info!(path = %path, "Writing validation report");
    fs::write(&path, json).await?;
    info!(
        path = %path,
        total = report.total,
        valid = report.valid,
        invalid = report.invalid,
        "Wrote validation report"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleRecord;
    use serde_json::json;

    fn verdicts() -> Vec<RecordVerdict> {
        let good: ArticleRecord = serde_json::from_value(json!({
            "title": "T", "content": "C", "url": "https://e.com"
        }))
        .unwrap();
        let bad: ArticleRecord = serde_json::from_value(json!({ "content": "C" })).unwrap();

        vec![
            RecordVerdict {
                record: good,
                is_valid: true,
                reasons: vec![],
            },
            RecordVerdict {
                record: bad,
                is_valid: false,
                reasons: vec![
                    "missing field: title".to_string(),
                    "missing field: url".to_string(),
                ],
            },
        ]
    }

    #[test]
    fn test_report_serialization_shape() {
        let verdicts = verdicts();
        let report = ValidationReport {
            generated_at: "2025-05-06T08:00:00Z",
            total: 2,
            valid: 1,
            invalid: 1,
            records: &verdicts,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total"], json!(2));
        assert_eq!(value["valid"], json!(1));
        assert_eq!(value["invalid"], json!(1));
        assert_eq!(value["records"][1]["reasons"][0], json!("missing field: title"));
        assert_eq!(value["records"][0]["record"]["title"], json!("T"));
    }

    #[tokio::test]
    async fn test_write_report_round_trip() {
        let dir = std::env::temp_dir().join("news_scrub_report_test");
        let out = dir.to_str().unwrap().to_string();

        let verdicts = verdicts();
        write_report("2025-05-06T08:00:00Z", &verdicts, &out)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["generated_at"], json!("2025-05-06T08:00:00Z"));
        assert_eq!(value["records"].as_array().unwrap().len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
