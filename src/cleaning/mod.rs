//! Text-cleaning pipeline for scraped article records.
//!
//! This module composes the per-string cleaning stages and applies them to
//! whole records and datasets.
//!
//! # Stages
//!
//! | Stage | Module | Removes |
//! |-------|--------|---------|
//! | Encoding normalization | [`encoding`] | Decode artifacts, mixed Unicode forms |
//! | Markup stripping | [`markup`] | Tag fragments, entities, ragged whitespace |
//! | Special characters | [`encoding`] | Typographic punctuation, control bytes |
//! | Boilerplate | [`boilerplate`] | Known paywall/JS notices (content only) |
//! | Date standardization | [`dates`] | Format variance in `published` values |
//!
//! # Common Patterns
//!
//! Every stage is a pure function from text to text that maps empty input to
//! empty output and never fails. Record-level cleaning returns a new record
//! and leaves the input untouched, so callers can keep the original for
//! auditing. Stage order is fixed: encoding normalization runs before markup
//! stripping so entity decoding sees canonical characters, and the
//! special-character pass runs after it so it operates on
//! already-collapsed text.

pub mod boilerplate;
pub mod dates;
pub mod encoding;
pub mod markup;

use crate::models::{ArticleRecord, Dataset};
use serde_json::Value;
use tracing::{debug, instrument};

use boilerplate::remove_nyt_boilerplate;
use encoding::{handle_special_characters, normalize_encoding};
use markup::remove_whitespace_and_html;

/// Read a record field as text. Absent, null, and non-string values all read
/// as the empty string; cleaning never propagates null.
fn text_or_empty(field: &Option<Value>) -> &str {
    field.as_ref().and_then(Value::as_str).unwrap_or("")
}

/// Apply the full cleaning composition to one string.
///
/// Order is fixed: [`normalize_encoding`] then [`remove_whitespace_and_html`]
/// then [`handle_special_characters`], with a final trim.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = normalize_encoding(text);
    let text = remove_whitespace_and_html(&text);
    let text = handle_special_characters(&text);
    text.trim().to_string()
}

/// Clean a single article record.
///
/// Rewrites `title` and `content` with their cleaned text (`content` also
/// goes through the boilerplate filter) and `url` with its trimmed form.
/// URLs get no further cleaning; entity decoding or Unicode folding could
/// corrupt percent-encoding. Fields that are present but null or non-string
/// become empty strings; fields that are absent stay absent. `published` and
/// every extra key pass through verbatim.
#[instrument(level = "debug", skip_all)]
pub fn clean_record(record: &ArticleRecord) -> ArticleRecord {
    let mut cleaned = record.clone();

    if record.title.is_some() {
        cleaned.title = Some(Value::String(clean_text(text_or_empty(&record.title))));
    }
    if record.content.is_some() {
        let content = clean_text(text_or_empty(&record.content));
        cleaned.content = Some(Value::String(remove_nyt_boilerplate(&content)));
    }
    if let Some(url) = &record.url {
        if !url.is_null() {
            cleaned.url = Some(Value::String(
                url.as_str().unwrap_or("").trim().to_string(),
            ));
        }
    }

    cleaned
}

/// Clean every article in a dataset, preserving order and `generated_at`.
#[instrument(level = "info", skip_all, fields(count = dataset.articles.len()))]
pub fn clean_dataset(dataset: &Dataset) -> Dataset {
    let cleaned = Dataset {
        generated_at: dataset.generated_at.clone(),
        articles: dataset.articles.iter().map(clean_record).collect(),
    };
    debug!(count = cleaned.articles.len(), "Cleaned dataset articles");
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ArticleRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_clean_text_full_composition() {
        let raw = "  <p>It\u{2019}s a \u{201C}test\u{201D} &amp; more</p>\u{FFFD}  ";
        assert_eq!(clean_text(raw), "It's a \"test\" & more");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let samples = [
            "<p>Breaking: markets &amp; rates</p>",
            "  plain   text\twith\nwhitespace  ",
            "curly \u{2018}quotes\u{2019} \u{2014} and dashes",
            "already clean",
            "",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_clean_record_rewrites_text_fields() {
        let raw = record(json!({
            "title": "<b>Big&nbsp;News</b>",
            "content": "<p>Body text.</p> Already a subscriber? Log in",
            "url": "  https://example.com/a  "
        }));

        let cleaned = clean_record(&raw);
        assert_eq!(cleaned.title, Some(json!("Big News")));
        assert_eq!(cleaned.content, Some(json!("Body text.")));
        assert_eq!(cleaned.url, Some(json!("https://example.com/a")));
    }

    #[test]
    fn test_clean_record_null_fields_become_empty_strings() {
        let raw = record(json!({ "title": null, "content": null, "url": "https://e.com" }));
        let cleaned = clean_record(&raw);

        assert_eq!(cleaned.title, Some(json!("")));
        assert_eq!(cleaned.content, Some(json!("")));
    }

    #[test]
    fn test_clean_record_null_url_passes_through() {
        let raw = record(json!({ "title": "T", "content": "C", "url": null }));
        assert_eq!(clean_record(&raw).url, Some(Value::Null));
    }

    #[test]
    fn test_clean_record_adds_and_removes_no_keys() {
        let raw = record(json!({
            "title": "T",
            "content": "C",
            "source": "cnn",
            "rank": 3
        }));

        let cleaned = clean_record(&raw);
        assert_eq!(cleaned.url, None);
        assert_eq!(cleaned.published, None);
        assert_eq!(cleaned.extra, raw.extra);

        let raw_keys: Vec<_> = serde_json::to_value(&raw)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        let cleaned_keys: Vec<_> = serde_json::to_value(&cleaned)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(raw_keys, cleaned_keys);
    }

    #[test]
    fn test_clean_record_leaves_published_untouched() {
        let raw = record(json!({
            "title": "T",
            "content": "C",
            "url": "https://e.com",
            "published": "25 December 2023"
        }));

        assert_eq!(clean_record(&raw).published, Some(json!("25 December 2023")));
    }

    #[test]
    fn test_clean_dataset_preserves_order_and_metadata() {
        let dataset: Dataset = serde_json::from_value(json!({
            "generated_at": "2025-05-06T08:00:00Z",
            "articles": [
                { "title": "<i>first</i>", "content": "a", "url": "https://e.com/1" },
                { "title": "second", "content": "b", "url": "https://e.com/2" },
                { "title": "third", "content": "c", "url": "https://e.com/3" }
            ]
        }))
        .unwrap();

        let cleaned = clean_dataset(&dataset);
        assert_eq!(cleaned.generated_at, "2025-05-06T08:00:00Z");
        assert_eq!(cleaned.articles.len(), dataset.articles.len());
        assert_eq!(cleaned.articles[0].title, Some(json!("first")));
        assert_eq!(cleaned.articles[1].title, Some(json!("second")));
        assert_eq!(cleaned.articles[2].title, Some(json!("third")));
    }
}
