//! Time-window selection over dated records.
//!
//! Comparisons are made on canonical `YYYY-MM-DD` strings, which order
//! correctly as plain strings because every field is zero-padded.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date;
use crate::error::ValidationError;
use crate::record::Record;

/// Anything that lives on a local calendar day.
pub trait Dated {
    /// Date portion of the item's stored date.
    fn day(&self) -> &str;
}

impl Dated for Record {
    fn day(&self) -> &str {
        Record::day(self)
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn day(&self) -> &str {
        (**self).day()
    }
}

/// Named or custom time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Today only.
    Day,
    /// Trailing seven days including today.
    #[default]
    Week,
    /// The calendar month containing today.
    Month,
    /// Everything the caller passed in; the list is already season-scoped.
    Season,
    /// Explicit `[custom_start, custom_end]` from [`FilterOptions`].
    Custom,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Season => "season",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "today" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "season" => Ok(Self::Season),
            "custom" => Ok(Self::Custom),
            other => Err(ValidationError::UnknownWindow(other.to_string())),
        }
    }
}

/// Optional inputs to [`filter_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub custom_start: Option<String>,
    #[serde(default)]
    pub custom_end: Option<String>,
    /// Injected "today"; the system clock is read when absent.
    #[serde(default)]
    pub now: Option<NaiveDate>,
}

impl FilterOptions {
    pub fn at(now: NaiveDate) -> Self {
        Self {
            now: Some(now),
            ..Default::default()
        }
    }

    pub fn custom(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            custom_start: Some(start.into()),
            custom_end: Some(end.into()),
            now: None,
        }
    }
}

/// Select the items falling in `window`, keeping their original order.
pub fn filter_records<'a, T: Dated>(
    items: &'a [T],
    window: TimeWindow,
    options: &FilterOptions,
) -> Vec<&'a T> {
    match window {
        TimeWindow::Season => items.iter().collect(),
        TimeWindow::Day => {
            let today = date::to_iso(date::resolve_today(options.now));
            items.iter().filter(|item| item.day() == today).collect()
        }
        TimeWindow::Week => {
            let today = date::resolve_today(options.now);
            let start = date::to_iso(today - Duration::days(6));
            let end = date::to_iso(today);
            within(items, &start, &end)
        }
        TimeWindow::Month => {
            let today = date::resolve_today(options.now);
            let current = (today.year(), today.month());
            items
                .iter()
                .filter(|item| date::year_month(item.day()) == Some(current))
                .collect()
        }
        TimeWindow::Custom => {
            let (Some(start), Some(end)) = (&options.custom_start, &options.custom_end) else {
                return items.iter().collect();
            };
            let start = date::date_part(start);
            let end = date::date_part(end);
            if start > end {
                tracing::debug!(start, end, "custom window is inverted, selecting nothing");
                return Vec::new();
            }
            within(items, start, end)
        }
    }
}

/// Inclusive string-range selection. Items whose day is not a canonical
/// date are left out so a malformed value cannot sort into the range.
fn within<'a, T: Dated>(items: &'a [T], start: &str, end: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            let day = item.day();
            date::parse_iso(day).is_ok() && day >= start && day <= end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordDetails;

    fn rec(id: &str, day: &str) -> Record {
        Record::new(id, day, RecordDetails::Other)
    }

    fn ids(selected: &[&Record]) -> Vec<String> {
        selected.iter().map(|r| r.id.clone()).collect()
    }

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("a", "2024-06-15"),
            rec("b", "2024-06-09"),
            rec("c", "2024-06-08"),
            rec("d", "2024-05-31"),
            rec("e", "2024-06-15T23:59:00Z"),
            rec("f", "garbage"),
            rec("g", "2024-06-01"),
        ]
    }

    #[test]
    fn day_window_matches_today_only() {
        let records = sample();
        let selected = filter_records(&records, TimeWindow::Day, &FilterOptions::at(now()));
        assert_eq!(ids(&selected), vec!["a", "e"]);
    }

    #[test]
    fn week_window_is_inclusive_of_six_days_back() {
        let records = sample();
        let selected = filter_records(&records, TimeWindow::Week, &FilterOptions::at(now()));
        assert_eq!(ids(&selected), vec!["a", "b", "e"]);
    }

    #[test]
    fn month_window_matches_calendar_month() {
        let records = sample();
        let selected = filter_records(&records, TimeWindow::Month, &FilterOptions::at(now()));
        assert_eq!(ids(&selected), vec!["a", "b", "c", "e", "g"]);
    }

    #[test]
    fn season_window_passes_everything_through() {
        let records = sample();
        let selected = filter_records(&records, TimeWindow::Season, &FilterOptions::at(now()));
        assert_eq!(selected.len(), records.len());
    }

    #[test]
    fn custom_window_inclusive_bounds() {
        let records = sample();
        let options = FilterOptions::custom("2024-05-31", "2024-06-08");
        let selected = filter_records(&records, TimeWindow::Custom, &options);
        assert_eq!(ids(&selected), vec!["c", "d", "g"]);
    }

    #[test]
    fn custom_window_with_missing_bound_passes_through() {
        let records = sample();
        let options = FilterOptions {
            custom_start: Some("2024-06-01".into()),
            ..Default::default()
        };
        let selected = filter_records(&records, TimeWindow::Custom, &options);
        assert_eq!(selected.len(), records.len());
    }

    #[test]
    fn custom_window_inverted_is_empty() {
        let records = sample();
        let options = FilterOptions::custom("2024-06-10", "2024-06-01");
        assert!(filter_records(&records, TimeWindow::Custom, &options).is_empty());
    }

    #[test]
    fn custom_bounds_may_carry_time_suffix() {
        let records = sample();
        let options = FilterOptions::custom("2024-06-15T00:00:00Z", "2024-06-15T23:59:59Z");
        let selected = filter_records(&records, TimeWindow::Custom, &options);
        assert_eq!(ids(&selected), vec!["a", "e"]);
    }

    #[test]
    fn time_window_parses_names() {
        assert_eq!("Month".parse::<TimeWindow>(), Ok(TimeWindow::Month));
        assert_eq!("today".parse::<TimeWindow>(), Ok(TimeWindow::Day));
        assert!("fortnight".parse::<TimeWindow>().is_err());
    }
}
