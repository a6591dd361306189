//! # setlog Core Library
//!
//! This library provides the analytics behind the setlog water-ski training
//! log. It never talks to the backend itself: callers hand it sets and tasks
//! that were already fetched, and get back derived figures or the next value
//! to display.
//!
//! ## Architecture
//!
//! - **Dates**: local calendar days as canonical `YYYY-MM-DD` strings, never
//!   shifted through a UTC parser
//! - **Filter**: day / week / month / season / custom windows
//! - **Stats**: streaks, weekly and monthly rollups, category breakdowns
//! - **Slalom**: rope-ladder scoring, best-result ranking, speed steps
//! - **Toggles**: request versioning so optimistic flips survive responses
//!   arriving out of order
//! - **Tasks**: to-do lifecycle and display order
//!
//! ## Key Components
//!
//! - [`filter_records`]: time-window selection
//! - [`DashboardReport`]: every stats-screen figure in one value
//! - [`ToggleGuard`] / [`OptimisticToggles`]: optimistic toggle reconciliation
//! - [`AppState`]: explicit state object the reducer acts on
//! - [`Config`]: application configuration management

pub mod date;
pub mod error;
pub mod filter;
pub mod record;
pub mod report;
pub mod slalom;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;
pub mod toggle;

pub use error::{ConfigError, CoreError, ValidationError};
pub use filter::{filter_records, Dated, FilterOptions, TimeWindow};
pub use record::{
    apply_default_speed_unit, EventType, JumpDetails, Record, RecordDetails, SlalomDetails,
    SpeedUnit, Trick, TrickDetails,
};
pub use report::{BestSlalom, DashboardReport};
pub use storage::Config;
pub use store::{Action, AppState, OptimisticToggles};
pub use task::{sort_tasks, DueBucket, Task};
pub use toggle::{Resolution, ToggleGuard, ToggleOutcome, ToggleTarget, ToggleTicket};
