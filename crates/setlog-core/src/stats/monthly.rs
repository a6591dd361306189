//! Month-over-month training progress.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::round_half_up;
use crate::date;
use crate::filter::Dated;

/// Months shown when the caller does not configure a count.
pub const DEFAULT_MONTHS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM`
    pub label: String,
    pub training_days: u32,
    pub total_records: u32,
    /// Percent change of `total_records` against the previous month.
    pub delta_percent: Option<i64>,
}

/// Percent change from `previous` to `current` sets.
///
/// A previous month with at most one set is treated as a baseline of one,
/// so the result is `current` as a percentage rather than an exploding or
/// undefined ratio.
pub fn month_over_month_delta(current: u32, previous: u32) -> i64 {
    if previous <= 1 {
        round_half_up(current as f64 / previous.max(1) as f64 * 100.0)
    } else {
        round_half_up((current as f64 - previous as f64) / previous as f64 * 100.0)
    }
}

#[derive(Default)]
struct MonthBuilder {
    total: u32,
    days: BTreeSet<NaiveDate>,
}

/// Training days and set counts for the last `months` calendar months,
/// oldest first, ending with the month containing "now".
///
/// One additional month before the window is counted so the oldest
/// returned month still gets a delta; that baseline month is not returned.
pub fn monthly_progress<'a, T, I>(
    items: I,
    months: usize,
    now: Option<NaiveDate>,
) -> Vec<MonthStats>
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if months == 0 {
        return Vec::new();
    }

    let today = date::resolve_today(now);
    let keys: Vec<(i32, u32)> = (0..=months as i32)
        .rev()
        .map(|back| date::shift_month(today.year(), today.month(), -back))
        .collect();

    let mut buckets: HashMap<(i32, u32), MonthBuilder> =
        keys.iter().map(|key| (*key, MonthBuilder::default())).collect();

    for day in items
        .into_iter()
        .filter_map(|item| date::parse_lenient(item.day()))
    {
        if let Some(bucket) = buckets.get_mut(&(day.year(), day.month())) {
            bucket.total += 1;
            bucket.days.insert(day);
        }
    }

    let mut window: Vec<MonthStats> = keys
        .iter()
        .map(|key| {
            let bucket = buckets.remove(key).unwrap_or_default();
            MonthStats {
                year: key.0,
                month: key.1,
                label: format!("{:04}-{:02}", key.0, key.1),
                training_days: bucket.days.len() as u32,
                total_records: bucket.total,
                delta_percent: None,
            }
        })
        .collect();

    apply_deltas(&mut window);
    // Drop the baseline month
    window.remove(0);
    window
}

/// Fill `delta_percent` for a chronological run of months. The first month
/// has no predecessor and keeps `None`.
fn apply_deltas(months: &mut [MonthStats]) {
    for i in 1..months.len() {
        let previous = months[i - 1].total_records;
        months[i].delta_percent = Some(month_over_month_delta(months[i].total_records, previous));
    }
    if let Some(first) = months.first_mut() {
        first.delta_percent = None;
    }
}
