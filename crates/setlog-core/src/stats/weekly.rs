//! This-week versus last-week comparison.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::round_half_up;
use crate::date;
use crate::filter::Dated;

/// One Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Monday, `YYYY-MM-DD`
    pub start: String,
    /// Sunday, `YYYY-MM-DD`
    pub end: String,
    pub total_records: u32,
    pub active_days: u32,
    /// Sets per day that had at least one set; 0 when no day did.
    pub average_per_active_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub this_week: WeekSummary,
    pub last_week: WeekSummary,
    /// Percent change of the per-active-day average. `None` when last week's
    /// average is 0 and the comparison is undefined.
    pub delta_percent: Option<i64>,
    /// Sets per weekday of the current week, Monday first.
    pub day_counts: [u32; 7],
}

struct WeekBuilder {
    start: NaiveDate,
    total: u32,
    days: BTreeSet<NaiveDate>,
}

impl WeekBuilder {
    fn new(start: NaiveDate) -> Self {
        Self {
            start,
            total: 0,
            days: BTreeSet::new(),
        }
    }

    fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day < self.start + Duration::days(7)
    }

    fn record(&mut self, day: NaiveDate) {
        self.total += 1;
        self.days.insert(day);
    }

    fn build(self) -> WeekSummary {
        let active_days = self.days.len() as u32;
        let average_per_active_day = if active_days == 0 {
            0.0
        } else {
            self.total as f64 / active_days as f64
        };
        WeekSummary {
            start: date::to_iso(self.start),
            end: date::to_iso(self.start + Duration::days(6)),
            total_records: self.total,
            active_days,
            average_per_active_day,
        }
    }
}

/// Compare the week containing "now" with the week before it.
pub fn weekly_stats<'a, T, I>(items: I, now: Option<NaiveDate>) -> WeeklyStats
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let today = date::resolve_today(now);
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    let mut this_week = WeekBuilder::new(monday);
    let mut last_week = WeekBuilder::new(monday - Duration::days(7));
    let mut day_counts = [0u32; 7];

    for day in items
        .into_iter()
        .filter_map(|item| date::parse_lenient(item.day()))
    {
        if this_week.contains(day) {
            this_week.record(day);
            day_counts[day.weekday().num_days_from_monday() as usize] += 1;
        } else if last_week.contains(day) {
            last_week.record(day);
        }
    }

    let this_week = this_week.build();
    let last_week = last_week.build();
    let delta_percent = if last_week.average_per_active_day == 0.0 {
        None
    } else {
        let change = this_week.average_per_active_day - last_week.average_per_active_day;
        Some(round_half_up(change / last_week.average_per_active_day * 100.0))
    };

    WeeklyStats {
        this_week,
        last_week,
        delta_percent,
        day_counts,
    }
}
