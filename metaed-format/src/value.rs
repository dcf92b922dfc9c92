//! Parsers and formatters for typed field values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use metaed_core::PlayerCount;

use crate::error::ValueError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_INPUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a rating as written, without clamping.
///
/// Accepts a plain float (`0.85`) or a percentage (`85%`).
pub fn parse_rating(text: &str) -> Result<f32, ValueError> {
    let text = text.trim();
    let (number, scale) = match text.strip_suffix('%') {
        Some(pct) => (pct.trim_end(), 100.0),
        None => (text, 1.0),
    };
    number
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v / scale)
        .ok_or_else(|| ValueError::NotANumber(text.to_string()))
}

/// Fixed two-decimal rating text.
pub fn format_rating(rating: f32) -> String {
    format!("{:.2}", rating)
}

/// Parse `N` or `MIN-MAX`.
pub fn parse_player_count(text: &str) -> Result<PlayerCount, ValueError> {
    let text = text.trim();
    let bad = || ValueError::BadRange(text.to_string());
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|_| bad());

    let range = match text.split_once('-') {
        Some((min, max)) => PlayerCount::new(parse(min)?, parse(max)?),
        None => PlayerCount::single(parse(text)?),
    };
    range.ok_or_else(bad)
}

/// Parse `YYYY-MM-DD`. `YYYY-MM` and `YYYY` are accepted with the missing
/// parts set to 1.
pub fn parse_release_date(text: &str) -> Result<NaiveDate, ValueError> {
    let text = text.trim();
    let bad = || ValueError::BadDate(text.to_string());

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(bad());
    }
    let mut numbers = [0u32, 1, 1];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        *slot = part.parse().map_err(|_| bad())?;
    }
    if parts[0].len() != 4 {
        return Err(bad());
    }

    NaiveDate::from_ymd_opt(numbers[0] as i32, numbers[1], numbers[2]).ok_or_else(bad)
}

pub fn format_release_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a local timestamp. A bare date means midnight.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, ValueError> {
    let text = text.trim();
    for layout in TIMESTAMP_INPUTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| ValueError::BadTimestamp(text.to_string()))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a non-negative count.
pub fn parse_count(text: &str) -> Result<u32, ValueError> {
    let text = text.trim();
    text.parse::<u32>()
        .map_err(|_| ValueError::NotANumber(text.to_string()))
}

#[cfg(test)]
#[path = "tests/value_tests.rs"]
mod tests;
