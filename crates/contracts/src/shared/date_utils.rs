/// Utilities for parsing and formatting dates
///
/// Backend timestamps are ISO 8601 strings; date inputs are `YYYY-MM-DD`.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parses a backend timestamp.
///
/// Accepts RFC 3339 (`2024-03-15T14:02:26.123Z`) and bare dates
/// (`2024-03-15`, read as midnight UTC). Anything else is `None`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date_input(value).map(start_of_day)
}

pub fn parse_optional(value: Option<&String>) -> Option<DateTime<Utc>> {
    value.and_then(|v| parse_timestamp(v))
}

/// Midnight UTC of the given day.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parses a `YYYY-MM-DD` date input. Invalid or empty input is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a date for a date input (`YYYY-MM-DD`), empty for `None`.
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Applies optional `min`/`max` bounds of a date input.
///
/// A date outside the bounds is rejected rather than clamped, the same way
/// the picker refuses to select it.
pub fn within_bounds(
    date: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> Option<NaiveDate> {
    if min.is_some_and(|m| date < m) || max.is_some_and(|m| date > m) {
        None
    } else {
        Some(date)
    }
}

/// DD.MM.YYYY
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// DD.MM.YYYY HH:MM:SS
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// HH:MM
pub fn format_time(value: &DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}
