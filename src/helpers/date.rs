//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Date portion of an ISO-8601 timestamp: everything before the `T`
///
/// # Examples
/// ```ignore
/// date_part("2024-01-15T10:30:00.000Z") // -> "2024-01-15"
/// ```
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or_default()
}

/// Format a publication timestamp with a Moment.js-style format string.
///
/// The timestamp keeps its own offset, so "YYYY-MM-DD" always matches
/// [`date_part`]. Unparseable input falls back to [`date_part`].
pub fn format_published(timestamp: &str, format: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => format_date(&date, format),
        Err(_) => date_part(timestamp).to_string(),
    }
}

/// Format a date using Moment.js-compatible format string
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each letter
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
