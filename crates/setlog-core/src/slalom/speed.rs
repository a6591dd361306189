//! Boat speeds snapped to the tournament speed table.

use crate::record::Record;

/// Standard tournament boat speeds in km/h, ascending.
pub const TOURNAMENT_STEPS_KPH: [f64; 11] = [
    28.0, 31.0, 34.0, 37.0, 40.0, 43.0, 46.0, 49.0, 52.0, 55.0, 58.0,
];

/// Smallest tournament step at or above `kph`, or the top step when `kph`
/// is faster than all of them.
pub fn next_step_by_kph(kph: f64) -> f64 {
    TOURNAMENT_STEPS_KPH
        .iter()
        .copied()
        .find(|step| *step >= kph)
        .unwrap_or(TOURNAMENT_STEPS_KPH[TOURNAMENT_STEPS_KPH.len() - 1])
}

/// Average tournament step across the slalom sets in `records`.
///
/// Each speed is snapped to its step before averaging and the average is
/// snapped again. Sets without a usable speed are skipped; `None` when no
/// set has one.
pub fn average_tournament_speed_step<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    let steps: Vec<f64> = records
        .into_iter()
        .filter_map(Record::slalom)
        .filter_map(|details| details.speed_kph())
        .map(next_step_by_kph)
        .collect();

    if steps.is_empty() {
        return None;
    }
    let average = steps.iter().sum::<f64>() / steps.len() as f64;
    Some(next_step_by_kph(average))
}
