//! Due date classification and date/time input parsing.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::ParseError;
use crate::fields::DueTag;

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Classify a due date against `today` by whole calendar days.
pub fn classify(due: NaiveDate, today: NaiveDate) -> DueTag {
    let days_until = (due - today).num_days();
    match days_until {
        0 => DueTag::Today,
        d if d > 0 => DueTag::InTime,
        _ => DueTag::Overdue,
    }
}

/// Parse a stored `yyyy-MM-dd` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Parse a stored `HH:mm` time.
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ParseError::InvalidTime(s.to_string()))
}

/// Normalise loosely typed date input such as `2023-6-5`.
///
/// The year is zero-padded to four digits and month/day to two before parsing.
/// Returns the canonical `yyyy-MM-dd` string on success.
pub fn normalise_date_input(input: &str) -> Result<String, ParseError> {
    let padded = input
        .trim()
        .split('-')
        .enumerate()
        .map(|(i, part)| {
            let width = if i == 0 { 4 } else { 2 };
            format!("{part:0>width$}")
        })
        .collect::<Vec<_>>()
        .join("-");
    let date = parse_date(&padded).map_err(|_| ParseError::InvalidDate(input.to_string()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Normalise loosely typed time input such as `9:5`.
///
/// Requires exactly two components; each is zero-padded to two digits and must
/// form a valid time of day. Returns the canonical `HH:mm` string on success.
pub fn normalise_time_input(input: &str) -> Result<String, ParseError> {
    let invalid = || ParseError::InvalidTime(input.to_string());
    let parts: Vec<&str> = input.trim().split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(invalid());
    };
    let padded = format!("{hour:0>2}:{minute:0>2}");
    parse_time(&padded).map_err(|_| invalid())?;
    Ok(padded)
}
