//! Rope-length ladder and the packed slalom score.

use crate::record::parse_leading_number;

/// Buoys in one full pass; one rung of the ladder is worth this many points.
pub const BUOYS_PER_PASS: f64 = 6.0;

/// Tournament rope lengths in meters, longest (easiest) first.
pub const ROPE_LADDER_M: [f64; 9] = [18.0, 16.0, 14.0, 13.0, 12.0, 11.25, 10.75, 10.25, 9.75];

/// "Off" names of each rung: meters shortened from the full 23 m line,
/// in feet.
pub const ROPE_OFF_LABELS: [&str; 9] = [
    "15off", "22off", "28off", "32off", "35off", "38off", "39.5off", "41off", "43off",
];

const LADDER_TOLERANCE_M: f64 = 0.01;

/// Position of a rope length on the ladder. Unknown or unparseable lengths
/// map to rung 0.
pub fn ladder_index_m(meters: f64) -> usize {
    ROPE_LADDER_M
        .iter()
        .position(|rung| (rung - meters).abs() < LADDER_TOLERANCE_M)
        .unwrap_or(0)
}

/// [`ladder_index_m`] over a free-text rope length such as `"11.25m"`.
pub fn ladder_index(rope_length: Option<&str>) -> usize {
    rope_length
        .and_then(parse_leading_number)
        .map_or(0, ladder_index_m)
}

/// `ladder_index × 6 + buoys`, a single ordinal for results at different
/// rope lengths.
pub fn score(rope_length: Option<&str>, buoys: Option<f64>) -> f64 {
    ladder_index(rope_length) as f64 * BUOYS_PER_PASS + buoys.unwrap_or(0.0)
}
