//! Local calendar date helpers.
//!
//! Every date in setlog is a local wall-clock day stored as `YYYY-MM-DD`.
//! Nothing here goes through a timezone-aware timestamp parser: a value like
//! `2024-06-01T23:30:00Z` is reduced to its first ten characters, never
//! converted to a UTC instant, so a set logged late in the evening cannot
//! drift onto the neighbouring day.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::ValidationError;

/// Length of a canonical `YYYY-MM-DD` string.
pub const ISO_DATE_LEN: usize = 10;

/// Format a calendar date as canonical `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a strict, zero-padded `YYYY-MM-DD` string.
pub fn parse_iso(s: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(s.to_string());
    if s.len() != ISO_DATE_LEN || !s.is_ascii() {
        return Err(invalid());
    }
    let well_formed = s.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(invalid());
    }
    let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = s[8..10].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// The date portion of an ISO-like string: its first ten characters.
///
/// Shorter strings come back unchanged.
pub fn date_part(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed.get(..ISO_DATE_LEN).unwrap_or(trimmed)
}

/// Parse the date portion of a possibly time-suffixed or malformed string.
pub fn parse_lenient(s: &str) -> Option<NaiveDate> {
    parse_iso(date_part(s)).ok()
}

/// `(year, month)` of the date portion, if it parses.
pub fn year_month(s: &str) -> Option<(i32, u32)> {
    parse_lenient(s).map(|d| (d.year(), d.month()))
}

/// The local wall-clock date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Canonical string for the local wall-clock date.
pub fn today() -> String {
    to_iso(local_today())
}

/// Use the injected "now" when given, otherwise read the system clock.
pub fn resolve_today(now: Option<NaiveDate>) -> NaiveDate {
    now.unwrap_or_else(local_today)
}

/// First day of the month `offset` months away from `(year, month)`.
/// Negative offsets walk backwards.
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}
