//! Consecutive training-day streaks.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::date;
use crate::filter::Dated;

fn training_days<'a, T, I>(items: I) -> BTreeSet<NaiveDate>
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter_map(|item| date::parse_lenient(item.day()))
        .collect()
}

/// Number of consecutive days with at least one set, counted back from
/// today.
///
/// A day without a set yet does not break the streak: if today is empty but
/// yesterday is not, counting starts from yesterday. When both are empty the
/// streak is 0, whatever happened earlier.
pub fn current_streak<'a, T, I>(items: I, now: Option<NaiveDate>) -> u32
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let days = training_days(items);
    let today = date::resolve_today(now);

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt().filter(|yesterday| days.contains(yesterday))
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Longest run of consecutive training days anywhere in the list.
pub fn longest_streak<'a, T, I>(items: I) -> u32
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let days = training_days(items);
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}
