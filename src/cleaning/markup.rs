//! HTML residue removal and whitespace collapsing.
//!
//! Article bodies are extracted upstream, but extraction leaves tag
//! fragments, encoded entities, and ragged whitespace behind. This pass is a
//! lexical strip over already-extracted text, not an HTML parser, and is
//! deliberately permissive about malformed markup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything shaped like a tag: `<` up to the next `>`.
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Strip tag-shaped substrings, decode HTML entities, and tidy whitespace.
///
/// Each tag is replaced with a single space so words separated only by
/// markup do not fuse together. Entity decoding runs after tag stripping so
/// entities sitting in attribute-like text still resolve, and the whitespace
/// collapse runs last to absorb the space artifacts the earlier steps leave.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(remove_whitespace_and_html("<p>A &amp; B</p>"), "A & B");
/// ```
pub fn remove_whitespace_and_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let without_tags = HTML_TAG_RE.replace_all(text, " ");
    let decoded = html_escape::decode_html_entities(&without_tags);
    collapse_whitespace(&decoded)
}
