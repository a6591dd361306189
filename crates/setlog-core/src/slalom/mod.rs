//! Slalom scoring.
//!
//! Results at different rope lengths are packed into one ordinal score
//! (`rung × 6 + buoys`) on a fixed tournament rope ladder, ranked with
//! deterministic tie-breaks, and unpacked again for display. Boat speeds are
//! normalized onto the tournament speed table.

mod best;
mod display;
mod ladder;
mod speed;

pub use best::{best_slalom, SlalomResult};
pub use display::{decompose_score, format_score, quantize_buoys, ScoreDisplay};
pub use ladder::{
    ladder_index, ladder_index_m, score, BUOYS_PER_PASS, ROPE_LADDER_M, ROPE_OFF_LABELS,
};
pub use speed::{average_tournament_speed_step, next_step_by_kph, TOURNAMENT_STEPS_KPH};
