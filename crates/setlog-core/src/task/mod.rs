//! Training to-do items.
//!
//! Tasks live in the backend; this module holds the snapshot type, its
//! small lifecycle (complete / reopen / edit) and the display order.

mod ordering;

pub use ordering::{compare_tasks, sort_tasks, DueBucket};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Local due day, `YYYY-MM-DD`
    #[serde(default)]
    pub due_date: Option<String>,
    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,
    /// Completion timestamp (null if not completed)
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create an open task.
    pub fn new(title: impl Into<String>, due_date: Option<String>, now: DateTime<Utc>) -> Self {
        Task {
            id: format!("task-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            due_date,
            completed: false,
            completed_at: None,
            updated_at: now,
        }
    }

    /// Flip completion, stamping or clearing `completed_at`.
    pub fn toggle_completed(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now);
        self.updated_at = now;
    }

    pub fn rename(&mut self, title: impl Into<String>, now: DateTime<Utc>) {
        self.title = title.into();
        self.updated_at = now;
    }

    pub fn set_due_date(&mut self, due_date: Option<String>, now: DateTime<Utc>) {
        self.due_date = due_date;
        self.updated_at = now;
    }

    /// Which due-date bucket the task falls in on `today`. Missing or
    /// malformed due dates land in [`DueBucket::NoDate`].
    pub fn bucket(&self, today: NaiveDate) -> DueBucket {
        let Some(due) = self.due_date.as_deref() else {
            return DueBucket::NoDate;
        };
        let due = date::date_part(due);
        if date::parse_iso(due).is_err() {
            return DueBucket::NoDate;
        }
        let today = date::to_iso(today);
        if due < today.as_str() {
            DueBucket::Overdue
        } else if due == today {
            DueBucket::Today
        } else {
            DueBucket::Upcoming
        }
    }
}
