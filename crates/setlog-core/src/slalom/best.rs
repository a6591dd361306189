//! Best slalom result with deterministic tie-breaks.

use serde::Serialize;
use std::cmp::Ordering;

use super::ladder::score;
use crate::record::Record;

/// Scores are sums of quarter buoys, so this only absorbs float noise.
const SCORE_EPSILON: f64 = 1e-9;

/// A scored slalom set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlalomResult<'a> {
    pub record: &'a Record,
    pub score: f64,
    pub rope_meters: Option<f64>,
    pub speed_kph: Option<f64>,
}

impl<'a> SlalomResult<'a> {
    /// Score a record; `None` for non-slalom records.
    pub fn from_record(record: &'a Record) -> Option<Self> {
        let details = record.slalom()?;
        Some(Self {
            record,
            score: score(details.rope_length.as_deref(), details.buoys),
            rope_meters: details.rope_meters(),
            speed_kph: details.speed_kph(),
        })
    }

    /// Ranking against another result: `Greater` means `self` is better.
    ///
    /// Higher score first, then the shorter rope, then the faster boat.
    /// Results equal on all three compare `Equal`.
    pub fn rank(&self, other: &Self) -> Ordering {
        let by_score = if (self.score - other.score).abs() <= SCORE_EPSILON {
            Ordering::Equal
        } else {
            self.score.total_cmp(&other.score)
        };
        // Unknown rope lengths never win the rope tie-break.
        let rope = |r: &Self| r.rope_meters.unwrap_or(f64::INFINITY);
        let speed = |r: &Self| r.speed_kph.unwrap_or(0.0);

        by_score
            .then_with(|| rope(other).total_cmp(&rope(self)))
            .then_with(|| speed(self).total_cmp(&speed(other)))
    }
}

/// The best slalom set in `records`. On a complete tie the earlier set
/// is kept.
pub fn best_slalom<'a, I>(records: I) -> Option<SlalomResult<'a>>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(SlalomResult::from_record)
        .fold(None, |best, candidate| match best {
            Some(current) if candidate.rank(&current) != Ordering::Greater => Some(current),
            _ => Some(candidate),
        })
}
