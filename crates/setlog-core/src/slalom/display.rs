//! Turning a packed score back into rope and buoys for display.

use serde::{Deserialize, Serialize};

use super::ladder::{BUOYS_PER_PASS, ROPE_LADDER_M, ROPE_OFF_LABELS};

/// A score split into its ladder rung and buoy count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub rope_index: usize,
    pub rope_meters: f64,
    pub off_label: String,
    pub buoys: f64,
}

/// Round to the nearest quarter buoy. A three-quarter buoy credits the next
/// whole buoy, so `3.75` becomes `4`.
pub fn quantize_buoys(buoys: f64) -> f64 {
    let quarters = (buoys * 4.0).round() / 4.0;
    if quarters - quarters.floor() == 0.75 {
        quarters.ceil()
    } else {
        quarters
    }
}

/// Split a stored score into rung and buoys.
///
/// Six whole buoys after rounding carry over to zero at the next rung when
/// the ladder has one. The top rung shows at most six buoys; a full pass
/// there is the highest score the ladder can express.
pub fn decompose_score(score: f64) -> ScoreDisplay {
    let last = ROPE_LADDER_M.len() - 1;
    let score = if score.is_finite() { score.max(0.0) } else { 0.0 };

    let mut rope_index = ((score / BUOYS_PER_PASS).floor() as usize).min(last);
    let mut buoys = quantize_buoys(score - rope_index as f64 * BUOYS_PER_PASS);
    if buoys >= BUOYS_PER_PASS {
        if rope_index < last {
            rope_index += 1;
            buoys -= BUOYS_PER_PASS;
        } else {
            buoys = BUOYS_PER_PASS;
        }
    }

    ScoreDisplay {
        rope_index,
        rope_meters: ROPE_LADDER_M[rope_index],
        off_label: ROPE_OFF_LABELS[rope_index].to_string(),
        buoys,
    }
}

/// `"<buoys> @ <meters>m (<off>)"`, e.g. `"4 @ 13m (32off)"`.
pub fn format_score(score: f64) -> String {
    let display = decompose_score(score);
    format!(
        "{} @ {}m ({})",
        display.buoys, display.rope_meters, display.off_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_to_quarters() {
        assert_eq!(quantize_buoys(2.1), 2.0);
        assert_eq!(quantize_buoys(2.2), 2.25);
        assert_eq!(quantize_buoys(2.5), 2.5);
        assert_eq!(quantize_buoys(0.0), 0.0);
    }

    #[test]
    fn three_quarters_rounds_up_to_next_buoy() {
        assert_eq!(quantize_buoys(3.75), 4.0);
        assert_eq!(quantize_buoys(3.7), 4.0);
        assert_eq!(quantize_buoys(0.75), 1.0);
    }

    #[test]
    fn decompose_recovers_rung_and_buoys() {
        let display = decompose_score(21.5);
        assert_eq!(display.rope_index, 3);
        assert_eq!(display.rope_meters, 13.0);
        assert_eq!(display.off_label, "32off");
        assert_eq!(display.buoys, 3.5);

        let display = decompose_score(21.75);
        assert_eq!(display.rope_index, 3);
        assert_eq!(display.buoys, 4.0);
    }

    #[test]
    fn six_buoys_carry_to_next_rung() {
        let display = decompose_score(23.75);
        assert_eq!(display.rope_index, 4);
        assert_eq!(display.buoys, 0.0);
    }

    #[test]
    fn top_rung_caps_at_a_full_pass() {
        let display = decompose_score(54.0);
        assert_eq!(display.rope_index, 8);
        assert_eq!(display.buoys, 6.0);

        let display = decompose_score(60.0);
        assert_eq!(display.rope_index, 8);
        assert_eq!(display.buoys, 6.0);
        assert_eq!(format_score(1000.0), "6 @ 9.75m (43off)");
    }

    #[test]
    fn negative_or_nan_scores_show_as_zero() {
        assert_eq!(decompose_score(-3.0).buoys, 0.0);
        assert_eq!(decompose_score(f64::NAN).rope_index, 0);
    }

    #[test]
    fn format_reads_like_a_scorecard() {
        assert_eq!(format_score(21.75), "4 @ 13m (32off)");
        assert_eq!(format_score(32.5), "2.5 @ 11.25m (38off)");
    }
}
