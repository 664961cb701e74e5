//! Publication-date standardization.
//!
//! News sources render publication dates in whatever format their CMS emits.
//! This module maps the formats observed in practice onto a canonical
//! `YYYY-MM-DD` rendering via an ordered cascade of candidate patterns.

use chrono::{NaiveDate, NaiveDateTime};

/// A candidate input format, tagged by whether it carries a time component.
#[derive(Debug, Clone, Copy)]
enum DateFormat {
    Date(&'static str),
    DateTime(&'static str),
}

/// Candidate formats, tried in order; the first one that parses the whole
/// string wins. Day-first numeric patterns come before their month-first
/// twins, which is the tie-break for strings both could match.
const DATE_FORMATS: &[DateFormat] = &[
    DateFormat::Date("%Y-%m-%d"),
    DateFormat::DateTime("%Y-%m-%dT%H:%M:%S"),
    DateFormat::DateTime("%Y-%m-%dT%H:%M"),
    DateFormat::DateTime("%Y-%m-%d %H:%M:%S"),
    DateFormat::DateTime("%Y-%m-%d %H:%M"),
    DateFormat::Date("%d/%m/%Y"),
    DateFormat::Date("%m/%d/%Y"),
    DateFormat::Date("%d-%m-%Y"),
    DateFormat::Date("%m-%d-%Y"),
    DateFormat::Date("%Y/%m/%d"),
    DateFormat::Date("%d %b %Y"),
    DateFormat::Date("%d %B %Y"),
    DateFormat::Date("%b %d, %Y"),
    DateFormat::Date("%B %d, %Y"),
];

/// Convert a date string in any recognized format to `YYYY-MM-DD`.
///
/// Unrecognized or partially matching input yields an empty string rather
/// than an error; callers that care about the loss can compare against the
/// input. chrono rejects trailing input, so every pattern matches the whole
/// string or not at all.
pub fn standardize_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    for format in DATE_FORMATS {
        let parsed = match format {
            DateFormat::Date(pattern) => NaiveDate::parse_from_str(trimmed, pattern).ok(),
            DateFormat::DateTime(pattern) => NaiveDateTime::parse_from_str(trimmed, pattern)
                .ok()
                .map(|dt| dt.date()),
        };
        if let Some(date) = parsed {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_passes_through() {
        assert_eq!(standardize_date("2023-12-25"), "2023-12-25");
    }

    #[test]
    fn test_iso_datetime_drops_time() {
        assert_eq!(standardize_date("2023-12-25T10:30:00"), "2023-12-25");
        assert_eq!(standardize_date("2023-12-25 10:30:00"), "2023-12-25");
        assert_eq!(standardize_date("2023-12-25T10:30"), "2023-12-25");
        assert_eq!(standardize_date("2023-12-25 10:30"), "2023-12-25");
    }

    #[test]
    fn test_month_name_formats() {
        assert_eq!(standardize_date("25 Dec 2023"), "2023-12-25");
        assert_eq!(standardize_date("25 December 2023"), "2023-12-25");
        assert_eq!(standardize_date("Dec 25, 2023"), "2023-12-25");
        assert_eq!(standardize_date("December 25, 2023"), "2023-12-25");
    }

    #[test]
    fn test_month_first_matches_when_day_first_cannot() {
        // 25 is not a valid month, so the day-first pattern fails and the
        // month-first pattern picks it up.
        assert_eq!(standardize_date("12/25/2023"), "2023-12-25");
    }

    #[test]
    fn test_day_first_wins_ambiguous_numeric_dates() {
        assert_eq!(standardize_date("01/02/2023"), "2023-02-01");
        assert_eq!(standardize_date("01-02-2023"), "2023-02-01");
    }

    #[test]
    fn test_slash_separated_iso_order() {
        assert_eq!(standardize_date("2023/12/25"), "2023-12-25");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(standardize_date("  2023-12-25  "), "2023-12-25");
    }

    #[test]
    fn test_unparseable_input_yields_empty() {
        assert_eq!(standardize_date("not a date"), "");
        assert_eq!(standardize_date("2023-13-05"), "");
        assert_eq!(standardize_date("32/01/2023"), "");
        assert_eq!(standardize_date("2023-12-25 extra"), "");
        assert_eq!(standardize_date(""), "");
        assert_eq!(standardize_date("   "), "");
    }
}
