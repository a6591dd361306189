//! Display order of tasks.
//!
//! Open tasks come first, grouped overdue, due today, upcoming, undated.
//! Upcoming tasks are ordered by due date. Any remaining tie, and the whole
//! completed group, goes most recently updated first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Task;
use crate::date;

/// Due-date group of an open task, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueBucket {
    Overdue,
    Today,
    Upcoming,
    NoDate,
}

/// Total order of two tasks as of `today`.
pub fn compare_tasks(a: &Task, b: &Task, today: NaiveDate) -> Ordering {
    let newest_first = || b.updated_at.cmp(&a.updated_at);

    match (a.completed, b.completed) {
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        (true, true) => return newest_first(),
        (false, false) => {}
    }

    let (bucket_a, bucket_b) = (a.bucket(today), b.bucket(today));
    bucket_a
        .cmp(&bucket_b)
        .then_with(|| {
            if bucket_a == DueBucket::Upcoming {
                due_day(a).cmp(due_day(b))
            } else {
                Ordering::Equal
            }
        })
        .then_with(newest_first)
}

fn due_day(task: &Task) -> &str {
    task.due_date
        .as_deref()
        .map(date::date_part)
        .unwrap_or_default()
}

/// Sort tasks into display order. `today` defaults to the local date.
pub fn sort_tasks(tasks: &mut [Task], now: Option<NaiveDate>) {
    let today = date::resolve_today(now);
    tasks.sort_by(|a, b| compare_tasks(a, b, today));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn task(id: &str, due: Option<&str>, completed: bool, updated_hour: u32) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            due_date: due.map(str::to_string),
            completed,
            completed_at: completed.then(|| at(updated_hour)),
            updated_at: at(updated_hour),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn today() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 5, 15)
    }

    #[test]
    fn open_tasks_follow_bucket_order() {
        let mut tasks = vec![
            task("none", None, false, 9),
            task("future", Some("2024-06-15"), false, 9),
            task("today", Some("2024-05-15"), false, 9),
            task("overdue", Some("2024-05-14"), false, 9),
        ];
        sort_tasks(&mut tasks, today());
        assert_eq!(ids(&tasks), vec!["overdue", "today", "future", "none"]);
    }

    #[test]
    fn upcoming_tasks_sort_by_date_then_recency() {
        let mut tasks = vec![
            task("later", Some("2024-07-01"), false, 12),
            task("soon-old", Some("2024-05-20"), false, 8),
            task("soon-new", Some("2024-05-20"), false, 10),
        ];
        sort_tasks(&mut tasks, today());
        assert_eq!(ids(&tasks), vec!["soon-new", "soon-old", "later"]);
    }

    #[test]
    fn overdue_ties_break_by_recency_not_date() {
        let mut tasks = vec![
            task("older-due", Some("2024-05-01"), false, 8),
            task("recent-due", Some("2024-05-10"), false, 11),
        ];
        sort_tasks(&mut tasks, today());
        assert_eq!(ids(&tasks), vec!["recent-due", "older-due"]);
    }

    #[test]
    fn completed_tasks_go_last_newest_first() {
        let mut tasks = vec![
            task("done-a", Some("2024-05-01"), true, 8),
            task("open", None, false, 1),
            task("done-c", None, true, 12),
            task("done-b", Some("2024-09-01"), true, 10),
        ];
        sort_tasks(&mut tasks, today());
        assert_eq!(ids(&tasks), vec!["open", "done-c", "done-b", "done-a"]);
    }

    #[test]
    fn malformed_due_date_sorts_with_undated() {
        let mut tasks = vec![
            task("garbled", Some("next tuesday"), false, 9),
            task("future", Some("2024-06-01"), false, 9),
        ];
        sort_tasks(&mut tasks, today());
        assert_eq!(ids(&tasks), vec!["future", "garbled"]);
        assert_eq!(tasks[1].bucket(today().unwrap()), DueBucket::NoDate);
    }
}
