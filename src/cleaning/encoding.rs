//! Character-level text normalization.
//!
//! Scraped text arrives with decode failures, mixed Unicode normalization
//! forms, and typographic punctuation that downstream matching chokes on.
//! This module owns the two character-level passes of the cleaning pipeline:
//! [`normalize_encoding`] runs before markup stripping, and
//! [`handle_special_characters`] runs after it.

use unicode_normalization::UnicodeNormalization;

/// Typographic punctuation folded to ASCII equivalents after NFKC.
const PUNCTUATION_MAPPINGS: &[(char, char)] = &[
    ('\u{2018}', '\''), // left single quotation mark
    ('\u{2019}', '\''), // right single quotation mark
    ('\u{201C}', '"'),  // left double quotation mark
    ('\u{201D}', '"'),  // right double quotation mark
    ('\u{2013}', '-'),  // en dash
    ('\u{2014}', '-'),  // em dash
];

/// Normalize the Unicode form of freshly scraped text.
///
/// Applies canonical composition (NFC) so combining-character sequences and
/// precomposed characters compare equal, drops U+FFFD replacement characters
/// left behind by upstream decode failures, and trims surrounding whitespace.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_encoding("Cafe\u{0301}"), "Café");
/// assert_eq!(normalize_encoding("bad \u{FFFD} byte"), "bad  byte");
/// ```
pub fn normalize_encoding(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let composed: String = text.nfc().filter(|&c| c != '\u{FFFD}').collect();
    composed.trim().to_string()
}

/// Fold compatibility variants and typographic punctuation to plain forms.
///
/// Applies compatibility normalization (NFKC), which also collapses
/// full-width and other compatibility variants into their canonical
/// characters, then substitutes curly quotes and dashes per
/// [`PUNCTUATION_MAPPINGS`], and finally strips every character in Unicode
/// category Cc. Scraped text can embed arbitrary control bytes, so the strip
/// is by category rather than a fixed whitespace set.
///
/// Surrounding whitespace is left alone; collapsing and trimming belong to
/// the markup pass.
pub fn handle_special_characters(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.nfkc()
        .map(|c| {
            PUNCTUATION_MAPPINGS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|&(_, to)| to)
                .unwrap_or(c)
        })
        .filter(|c| !c.is_control())
        .collect()
}
