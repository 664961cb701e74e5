//! Record validation: required fields, URL shape, and content length.
//!
//! Validation never short-circuits. Every applicable check runs and
//! contributes its own reasons, so a record missing its title AND carrying
//! thin content reports both problems in one pass. The reason strings are a
//! stable vocabulary consumed by downstream tooling; change them and the
//! tooling breaks.

use crate::models::{ArticleRecord, RecordVerdict, ValidationVerdict};
use serde_json::Value;
use tracing::instrument;
use url::Url;

/// Minimum trimmed content length, in characters, for a record to count as a
/// real article rather than a stub or teaser.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 120;

/// The required fields, in the order their reasons are reported.
fn named_fields(record: &ArticleRecord) -> [(&'static str, Option<&Value>); 3] {
    [
        ("title", record.title.as_ref()),
        ("content", record.content.as_ref()),
        ("url", record.url.as_ref()),
    ]
}

/// Python-style truthiness over JSON values, used to decide whether a `url`
/// value is worth parsing at all.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Check that a record carries `title`, `content`, and `url`.
///
/// An absent key yields `"missing field: <name>"`; a key that is present but
/// null, or a string that trims to nothing, yields `"empty field: <name>"`.
/// Present non-null values of other types produce no reason here.
pub fn has_required_fields(record: &ArticleRecord) -> (bool, Vec<String>) {
    let mut reasons = Vec::new();
    for (name, value) in named_fields(record) {
        match value {
            None => reasons.push(format!("missing field: {name}")),
            Some(Value::Null) => reasons.push(format!("empty field: {name}")),
            Some(Value::String(s)) if s.trim().is_empty() => {
                reasons.push(format!("empty field: {name}"))
            }
            Some(_) => {}
        }
    }
    (reasons.is_empty(), reasons)
}

/// Check that a URL value parses with an `http` or `https` scheme and a
/// non-empty host. Null, non-string, empty, and unparseable values are all
/// invalid; nothing here errors.
pub fn is_valid_url(value: &Value) -> bool {
    let Some(url) = value.as_str() else {
        return false;
    };
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Check that content meets the minimum trimmed character length.
///
/// Null or non-string content reads as empty and reports
/// `"empty field: content"`; a string below the threshold reports
/// `"content too short (<{min_length} chars)"`.
pub fn check_content_length(content: &Value, min_length: usize) -> (bool, Vec<String>) {
    let Some(text) = content.as_str() else {
        return (false, vec!["empty field: content".to_string()]);
    };
    if text.trim().chars().count() < min_length {
        let reasons = vec![format!("content too short (<{min_length} chars)")];
        return (false, reasons);
    }
    (true, Vec::new())
}

/// Validate a single record, accumulating every applicable reason.
///
/// Checks run in a fixed order: required fields, then URL shape (skipped
/// when `url` is absent or falsy, since the required-fields check already
/// covers that case), then content length (whenever the `content` key is
/// present, null included). The verdict is valid iff no check produced a
/// reason.
pub fn validate_record(record: &ArticleRecord, min_content_length: usize) -> ValidationVerdict {
    let mut reasons = Vec::new();

    let (_, field_reasons) = has_required_fields(record);
    reasons.extend(field_reasons);

    if let Some(url) = &record.url {
        if is_truthy(url) && !is_valid_url(url) {
            reasons.push("invalid url".to_string());
        }
    }

    if let Some(content) = &record.content {
        let (_, length_reasons) = check_content_length(content, min_content_length);
        reasons.extend(length_reasons);
    }

    ValidationVerdict {
        is_valid: reasons.is_empty(),
        reasons,
    }
}

/// Validate a batch of records independently, preserving input order and
/// pairing each verdict with its originating record.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub fn validate_records(records: &[ArticleRecord], min_content_length: usize) -> Vec<RecordVerdict> {
    records
        .iter()
        .map(|record| {
            let verdict = validate_record(record, min_content_length);
            RecordVerdict {
                record: record.clone(),
                is_valid: verdict.is_valid,
                reasons: verdict.reasons,
            }
        })
        .collect()
}
