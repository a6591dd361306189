//! Dashboard report: one pass from raw sets to every figure the stats
//! screen shows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::filter::{filter_records, FilterOptions, TimeWindow};
use crate::record::{EventType, Record};
use crate::slalom::{self, ScoreDisplay};
use crate::stats::{self, CategoryShare, MonthStats, WeeklyStats};

/// Best slalom set, in owned form for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSlalom {
    pub record_id: String,
    pub date: String,
    pub score: f64,
    pub display: ScoreDisplay,
    pub formatted: String,
    pub speed_kph: Option<f64>,
}

impl BestSlalom {
    pub fn from_result(result: &slalom::SlalomResult<'_>) -> Self {
        Self {
            record_id: result.record.id.clone(),
            date: result.record.day().to_string(),
            score: result.score,
            display: slalom::decompose_score(result.score),
            formatted: slalom::format_score(result.score),
            speed_kph: result.speed_kph,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Day the report was computed for, `YYYY-MM-DD`.
    pub today: String,
    pub window: TimeWindow,
    pub total_records: usize,
    pub favorite_records: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly: WeeklyStats,
    pub monthly: Vec<MonthStats>,
    pub breakdown: Vec<CategoryShare>,
    pub most_practiced: Option<EventType>,
    pub best_slalom: Option<BestSlalom>,
    /// Average tournament speed step in km/h.
    pub average_speed_step_kph: Option<f64>,
}

impl DashboardReport {
    /// Build the report.
    ///
    /// Window-scoped figures (counts, breakdown, slalom) use the records the
    /// window selects. Streaks and the weekly and monthly comparisons always
    /// look at the whole season so they can reach back past the window.
    pub fn build(
        records: &[Record],
        window: TimeWindow,
        options: &FilterOptions,
        months: usize,
    ) -> Self {
        let today = date::resolve_today(options.now);
        let now: Option<NaiveDate> = Some(today);
        let options = FilterOptions {
            now,
            ..options.clone()
        };

        let selected = filter_records(records, window, &options);
        tracing::debug!(
            window = %window,
            selected = selected.len(),
            total = records.len(),
            "building dashboard report"
        );
        let selected_iter = || selected.iter().copied();

        DashboardReport {
            today: date::to_iso(today),
            window,
            total_records: selected.len(),
            favorite_records: selected.iter().filter(|r| r.favorite).count(),
            current_streak: stats::current_streak(records, now),
            longest_streak: stats::longest_streak(records),
            weekly: stats::weekly_stats(records, now),
            monthly: stats::monthly_progress(records, months, now),
            breakdown: stats::event_breakdown(selected_iter()),
            most_practiced: stats::most_practiced(selected_iter()),
            best_slalom: slalom::best_slalom(selected_iter())
                .map(|best| BestSlalom::from_result(&best)),
            average_speed_step_kph: slalom::average_tournament_speed_step(selected_iter()),
        }
    }
}
