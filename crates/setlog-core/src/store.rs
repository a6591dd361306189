//! Explicit application state and its reducer.
//!
//! The state object is owned by the caller and passed to whatever needs it;
//! there is no process-wide store. Optimistic toggles are layered on top by
//! [`OptimisticToggles`], which writes the optimistic value into the state
//! right away and later applies the guard's decision for each outcome.

use serde::{Deserialize, Serialize};

use crate::record::{Record, Trick};
use crate::task::Task;
use crate::toggle::{Resolution, ToggleGuard, ToggleOutcome, ToggleTarget, ToggleTicket};

/// Everything the analytics read, as fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub tricks: Vec<Trick>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// State transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace everything with a fresh fetch.
    Hydrate(AppState),
    UpsertRecord(Record),
    RemoveRecord(String),
    SetFavorite { record_id: String, value: bool },
    SetTrickLearned { trick_id: String, value: bool },
    UpsertTask(Task),
    RemoveTask(String),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Hydrate(state) => *self = state,
            Action::UpsertRecord(record) => {
                match self.records.iter_mut().find(|r| r.id == record.id) {
                    Some(existing) => *existing = record,
                    None => self.records.push(record),
                }
            }
            Action::RemoveRecord(id) => self.records.retain(|r| r.id != id),
            Action::SetFavorite { record_id, value } => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id == record_id) {
                    record.favorite = value;
                }
            }
            Action::SetTrickLearned { trick_id, value } => {
                if let Some(trick) = self.tricks.iter_mut().find(|t| t.id == trick_id) {
                    trick.learned = value;
                }
            }
            Action::UpsertTask(task) => match self.tasks.iter_mut().find(|t| t.id == task.id) {
                Some(existing) => *existing = task,
                None => self.tasks.push(task),
            },
            Action::RemoveTask(id) => self.tasks.retain(|t| t.id != id),
        }
    }

    /// Reducer form of [`AppState::apply`].
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn trick(&self, id: &str) -> Option<&Trick> {
        self.tricks.iter().find(|t| t.id == id)
    }

    /// Currently displayed value of a toggle target, if the entity exists.
    pub fn flag(&self, target: &ToggleTarget) -> Option<bool> {
        match target {
            ToggleTarget::Favorite(id) => self.record(id).map(|r| r.favorite),
            ToggleTarget::TrickLearned(id) => self.trick(id).map(|t| t.learned),
        }
    }

    fn set_flag(&mut self, target: &ToggleTarget, value: bool) {
        let action = match target {
            ToggleTarget::Favorite(id) => Action::SetFavorite {
                record_id: id.clone(),
                value,
            },
            ToggleTarget::TrickLearned(id) => Action::SetTrickLearned {
                trick_id: id.clone(),
                value,
            },
        };
        self.apply(action);
    }

    pub fn learned_trick_count(&self) -> usize {
        self.tricks.iter().filter(|t| t.learned).count()
    }
}

/// Optimistic toggling of flags held in an [`AppState`].
#[derive(Debug, Clone, Default)]
pub struct OptimisticToggles {
    guard: ToggleGuard,
}

impl OptimisticToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `intended` immediately and issue a versioned ticket for the
    /// request. `None` when the entity is not in the state.
    pub fn begin(
        &mut self,
        state: &mut AppState,
        target: ToggleTarget,
        intended: bool,
    ) -> Option<ToggleTicket> {
        let current = state.flag(&target)?;
        let ticket = self.guard.begin(target, current, intended);
        state.set_flag(&ticket.target, intended);
        Some(ticket)
    }

    /// Reconcile the state with a completed request.
    pub fn settle(&self, state: &mut AppState, outcome: &ToggleOutcome) -> Resolution {
        let resolution = self.guard.settle(outcome);
        if let Resolution::RolledBack(value) = resolution {
            state.set_flag(&outcome.target, value);
        }
        resolution
    }

    pub fn guard(&self) -> &ToggleGuard {
        &self.guard
    }
}
