//! Data models for scraped article records and their processed representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: A single scraped article, raw or cleaned
//! - [`Dataset`]: A batch of articles with its generation timestamp
//! - [`ValidationVerdict`]: The accept/reject outcome for one record
//! - [`RecordVerdict`]: A record paired with its verdict, for reporting
//!
//! Records come from scrapers of varying quality, so every named field may be
//! absent, JSON `null`, a string, or some other JSON value entirely. Those
//! states are semantically different downstream (an absent `url` is reported
//! differently from an empty one), so the fields are `Option<Value>` with a
//! deserializer that keeps `null` as `Some(Value::Null)` instead of folding it
//! into `None`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keep `"field": null` distinguishable from an absent key: a present null
/// becomes `Some(Value::Null)` rather than `None`.
fn preserve_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A single news article record as scraped from a web source.
///
/// The same shape is used before and after cleaning; cleaning rewrites the
/// `title`, `content`, and `url` values in place and touches nothing else.
/// Keys that were absent on input stay absent on output, and unrecognized
/// keys round-trip verbatim through `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article headline.
    #[serde(default, deserialize_with = "preserve_null", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// The article body text.
    #[serde(default, deserialize_with = "preserve_null", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// The URL the article was scraped from.
    #[serde(default, deserialize_with = "preserve_null", skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    /// Publication date as scraped, in whatever format the source used.
    #[serde(default, deserialize_with = "preserve_null", skip_serializing_if = "Option::is_none")]
    pub published: Option<Value>,
    /// Any other keys the scraper attached; preserved untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A batch of scraped articles, as produced by an upstream scraping run.
///
/// `generated_at` is an opaque timestamp string owned by the scraper; this
/// application passes it through unchanged (empty string when absent).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    /// When the upstream scrape produced this batch. Opaque, not parsed.
    #[serde(default)]
    pub generated_at: String,
    /// The articles in scrape order.
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

/// The outcome of validating one record.
///
/// `reasons` is empty exactly when `is_valid` is true. The reason strings
/// follow a stable vocabulary (`"missing field: <name>"`,
/// `"empty field: <name>"`, `"invalid url"`,
/// `"content too short (<N chars)"`) so downstream tooling can pattern-match
/// on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    /// Whether the record is acceptable for the downstream dataset.
    pub is_valid: bool,
    /// Why it was rejected, in check order. Empty iff `is_valid`.
    pub reasons: Vec<String>,
}

/// A validated record together with its verdict, as written to the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordVerdict {
    /// The record that was validated.
    pub record: ArticleRecord,
    /// Whether the record passed every check.
    pub is_valid: bool,
    /// Accumulated failure reasons. Empty iff `is_valid`.
    pub reasons: Vec<String>,
}
