//! Fixed-phrase boilerplate removal.
//!
//! The New York Times scraper path returns article bodies with access-wall
//! and JavaScript-warning notices spliced into the text. The phrases are
//! stable byte-for-byte, so a denylist of exact substrings is enough; this
//! does not generalize to paraphrases or to other sources.

use crate::cleaning::markup::collapse_whitespace;

/// Known access/paywall notices, removed in this order.
const NYT_BOILERPLATE_PHRASES: &[&str] = &[
    "We are having trouble retrieving the article content",
    "Please enable JavaScript in your browser settings",
    "Thank you for your patience while we verify access",
    "Already a subscriber? Log in",
    "Want all of The Times? Subscribe",
];

/// Remove known NYT access/paywall boilerplate phrases from content.
///
/// Every literal occurrence of each phrase is replaced with a single space,
/// then whitespace runs collapse and the ends are trimmed. Text around the
/// phrases is preserved.
pub fn remove_nyt_boilerplate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = text.to_string();
    for phrase in NYT_BOILERPLATE_PHRASES {
        result = result.replace(phrase, " ");
    }
    collapse_whitespace(&result)
}
