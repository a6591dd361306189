//! Request versioning for optimistic boolean toggles.
//!
//! A toggle flips the displayed value immediately and settles later when the
//! backend answers. Answers can arrive in any order, so every request carries
//! a version scoped to its target. Only the answer to the latest request for
//! a target may change what is displayed; older answers are dropped.
//!
//! ```text
//!   begin(true)  -> v1, show true
//!   begin(false) -> v2, show false
//!   settle(v1 ok)    -> stale, ignored
//!   settle(v2 ok)    -> confirmed, false stays
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What a toggle acts on. Each kind has its own id space, so the favorite
/// flag of set `x` and the learned flag of trick `x` never share a counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ToggleTarget {
    /// Favorite flag of a record.
    Favorite(String),
    /// Learned flag of a catalog trick.
    TrickLearned(String),
}

impl fmt::Display for ToggleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorite(id) => write!(f, "favorite:{id}"),
            Self::TrickLearned(id) => write!(f, "trick_learned:{id}"),
        }
    }
}

/// Handed out when a toggle request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleTicket {
    pub target: ToggleTarget,
    pub version: u64,
    /// Value displayed right before this request's optimistic flip.
    pub previous_value: bool,
    pub intended_value: bool,
}

impl ToggleTicket {
    pub fn outcome(&self, succeeded: bool) -> ToggleOutcome {
        ToggleOutcome {
            target: self.target.clone(),
            request_version: self.version,
            succeeded,
            previous_value: self.previous_value,
        }
    }

    pub fn succeeded(&self) -> ToggleOutcome {
        self.outcome(true)
    }

    pub fn failed(&self) -> ToggleOutcome {
        self.outcome(false)
    }
}

/// Completion of a toggle request, delivered once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub target: ToggleTarget,
    pub request_version: u64,
    pub succeeded: bool,
    pub previous_value: bool,
}

/// What to do with the displayed value once an outcome arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "resolution", content = "value")]
pub enum Resolution {
    /// A newer request exists; leave the display alone.
    Stale,
    /// The optimistic value stands.
    Confirmed,
    /// The request failed; show this value again.
    RolledBack(bool),
}

impl Resolution {
    /// Decide the fate of an outcome given the latest issued version.
    pub fn decide(
        request_version: u64,
        latest_version: u64,
        succeeded: bool,
        previous_value: bool,
    ) -> Self {
        if request_version != latest_version {
            Self::Stale
        } else if succeeded {
            Self::Confirmed
        } else {
            Self::RolledBack(previous_value)
        }
    }

    /// Apply to the currently displayed value.
    pub fn apply(&self, displayed: bool) -> bool {
        match self {
            Self::Stale | Self::Confirmed => displayed,
            Self::RolledBack(previous) => *previous,
        }
    }
}

/// Next displayed value after an outcome, as a plain function.
pub fn next_displayed_state(
    displayed: bool,
    request_version: u64,
    latest_version: u64,
    succeeded: bool,
    previous_value: bool,
) -> bool {
    Resolution::decide(request_version, latest_version, succeeded, previous_value).apply(displayed)
}

/// Per-target request version counters.
#[derive(Debug, Clone, Default)]
pub struct ToggleGuard {
    versions: HashMap<ToggleTarget, u64>,
}

impl ToggleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for `target`, bumping its version.
    ///
    /// `current` is the value displayed right now; the caller shows
    /// `intended` until the request settles.
    pub fn begin(&mut self, target: ToggleTarget, current: bool, intended: bool) -> ToggleTicket {
        let version = self.versions.entry(target.clone()).or_insert(0);
        *version += 1;
        ToggleTicket {
            target,
            version: *version,
            previous_value: current,
            intended_value: intended,
        }
    }

    /// Latest issued version for `target`; 0 when nothing was issued.
    pub fn latest_version(&self, target: &ToggleTarget) -> u64 {
        self.versions.get(target).copied().unwrap_or(0)
    }

    /// Classify an arriving outcome.
    pub fn settle(&self, outcome: &ToggleOutcome) -> Resolution {
        let latest = self.latest_version(&outcome.target);
        let resolution = Resolution::decide(
            outcome.request_version,
            latest,
            outcome.succeeded,
            outcome.previous_value,
        );
        match resolution {
            Resolution::Stale => tracing::debug!(
                target_id = %outcome.target,
                request_version = outcome.request_version,
                latest,
                "discarding stale toggle outcome"
            ),
            Resolution::RolledBack(value) => tracing::warn!(
                target_id = %outcome.target,
                request_version = outcome.request_version,
                restored = value,
                "toggle request failed, rolling back"
            ),
            Resolution::Confirmed => {}
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fav(id: &str) -> ToggleTarget {
        ToggleTarget::Favorite(id.to_string())
    }

    #[test]
    fn versions_increase_per_target() {
        let mut guard = ToggleGuard::new();
        assert_eq!(guard.latest_version(&fav("a")), 0);
        assert_eq!(guard.begin(fav("a"), false, true).version, 1);
        assert_eq!(guard.begin(fav("a"), true, false).version, 2);
        assert_eq!(guard.begin(fav("b"), false, true).version, 1);
        assert_eq!(guard.latest_version(&fav("a")), 2);
    }

    #[test]
    fn kinds_do_not_share_counters() {
        let mut guard = ToggleGuard::new();
        guard.begin(fav("x"), false, true);
        let learned = guard.begin(ToggleTarget::TrickLearned("x".into()), false, true);
        assert_eq!(learned.version, 1);
    }

    #[test]
    fn out_of_order_success_keeps_last_intent() {
        let mut guard = ToggleGuard::new();
        let mut displayed = false;

        let first = guard.begin(fav("a"), displayed, true);
        displayed = first.intended_value;
        let second = guard.begin(fav("a"), displayed, false);
        displayed = second.intended_value;

        let r1 = guard.settle(&first.succeeded());
        assert_eq!(r1, Resolution::Stale);
        displayed = r1.apply(displayed);

        let r2 = guard.settle(&second.succeeded());
        assert_eq!(r2, Resolution::Confirmed);
        displayed = r2.apply(displayed);

        assert!(!displayed);
    }

    #[test]
    fn failure_of_latest_restores_its_own_previous_value() {
        let mut guard = ToggleGuard::new();
        let first = guard.begin(fav("a"), false, true);
        let second = guard.begin(fav("a"), true, false);

        // Latest fails after the stale one succeeded: back to what was shown
        // when the latest was issued (true), not the original false.
        assert_eq!(guard.settle(&first.succeeded()), Resolution::Stale);
        assert_eq!(guard.settle(&second.failed()), Resolution::RolledBack(true));
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut guard = ToggleGuard::new();
        let first = guard.begin(fav("a"), false, true);
        let _second = guard.begin(fav("a"), true, false);
        assert_eq!(guard.settle(&first.failed()), Resolution::Stale);
    }

    #[test]
    fn plain_function_form() {
        assert!(next_displayed_state(true, 1, 1, true, false));
        assert!(!next_displayed_state(true, 1, 1, false, false));
        assert!(next_displayed_state(true, 1, 2, false, false));
    }

    #[test]
    fn target_display() {
        assert_eq!(fav("r1").to_string(), "favorite:r1");
        assert_eq!(
            ToggleTarget::TrickLearned("t".into()).to_string(),
            "trick_learned:t"
        );
    }
}
