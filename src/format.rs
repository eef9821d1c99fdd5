//! Locale-aware date formatting for methodology metadata.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, Utc};

/// Text returned for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const ENGLISH_FORMAT: &str = "%b %-d, %Y";
const DAY_FIRST_FORMAT: &str = "%-d %b %Y";

/// Format a date as a short, human-readable string.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or RFC 3339 timestamps.
/// English locales produce `Jan 15, 2025`; other locales produce a
/// day-first date with localized month abbreviations. A bare language tag
/// is read as its same-named region (`fr` as `fr_FR`). Locales chrono does
/// not know fall back to the English layout.
///
/// # Example
///
/// ```
/// use ai_transparency::format::{format_date, INVALID_DATE};
///
/// assert_eq!(format_date("2025-01-15", "en-US"), "Jan 15, 2025");
/// assert_eq!(format_date("2025-03-02T10:30:00Z", "en-GB"), "Mar 2, 2025");
/// assert_eq!(format_date("yesterday", "en-US"), INVALID_DATE);
/// ```
#[must_use]
pub fn format_date(date: &str, locale: &str) -> String {
    let Some(parsed) = parse_date(date.trim()) else {
        tracing::debug!(date, "Unparseable date");
        return INVALID_DATE.to_string();
    };

    if locale.is_empty() || locale.starts_with("en") {
        return parsed.format(ENGLISH_FORMAT).to_string();
    }

    resolve_locale(locale).map_or_else(
        || {
            tracing::debug!(locale, "Unknown locale, using English layout");
            parsed.format(ENGLISH_FORMAT).to_string()
        },
        |loc| {
            // Some locales pad month abbreviations (`ja_JP` gives " 1月").
            parsed
                .format_localized(DAY_FIRST_FORMAT, loc)
                .to_string()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

/// Map a BCP 47 tag to a chrono locale.
///
/// A bare language tag such as `fr` is tried as `fr_FR`.
fn resolve_locale(locale: &str) -> Option<Locale> {
    let posix = locale.replace('-', "_");
    if let Ok(loc) = Locale::try_from(posix.as_str()) {
        return Some(loc);
    }
    if posix.contains('_') {
        return None;
    }
    let regional = format!("{posix}_{}", posix.to_uppercase());
    Locale::try_from(regional.as_str()).ok()
}

fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.and_utc());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}
