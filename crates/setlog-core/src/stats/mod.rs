//! Statistics module for setlog
//!
//! Derives training statistics from an already filtered list of sets:
//! day streaks, weekly and monthly rollups with period-over-period deltas,
//! and per-category breakdowns. Every function degrades to neutral values
//! (zero, empty, `None`) on empty or malformed input instead of failing.

mod breakdown;
mod monthly;
mod streak;
mod weekly;

pub use breakdown::{event_breakdown, most_practiced, CategoryShare};
pub use monthly::{month_over_month_delta, monthly_progress, MonthStats, DEFAULT_MONTHS};
pub use streak::{current_streak, longest_streak};
pub use weekly::{weekly_stats, WeekSummary, WeeklyStats};

/// Round to the nearest integer with halves going up, `-2.5` becoming `-2`.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
