use clap::Subcommand;
use serde_json::json;
use setlog_core::report::BestSlalom;
use setlog_core::slalom;
use setlog_core::{apply_default_speed_unit, Config, Record};
use std::path::{Path, PathBuf};

use super::{print_json, read_json, CliResult};

#[derive(Subcommand)]
pub enum SlalomAction {
    /// Score a single result
    Score {
        /// Rope length in meters, e.g. 13 or 11.25m
        #[arg(long)]
        rope: String,
        /// Buoys at that rope length
        #[arg(long)]
        buoys: Option<f64>,
    },
    /// Best slalom set in a records file
    Best {
        #[arg(long)]
        records: PathBuf,
    },
    /// Average tournament speed step of a records file
    Speed {
        #[arg(long)]
        records: PathBuf,
    },
    /// Snap a speed to the tournament table
    Step {
        /// Speed in km/h
        #[arg(long)]
        kph: f64,
    },
    /// Turn a stored score back into rope and buoys
    Decode {
        #[arg(long)]
        score: f64,
    },
}

/// Records with the configured speed unit applied to unitless sets.
fn load_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut records: Vec<Record> = read_json(path)?;
    apply_default_speed_unit(&mut records, config.slalom.default_speed_unit);
    Ok(records)
}

pub fn run(action: SlalomAction) -> CliResult {
    match action {
        SlalomAction::Score { rope, buoys } => {
            let score = slalom::score(Some(rope.as_str()), buoys);
            print_json(&json!({
                "score": score,
                "ladder_index": slalom::ladder_index(Some(rope.as_str())),
                "formatted": slalom::format_score(score),
            }))
        }
        SlalomAction::Best { records } => {
            let records = load_records(&records)?;
            let best = slalom::best_slalom(&records).map(|r| BestSlalom::from_result(&r));
            print_json(&best)
        }
        SlalomAction::Speed { records } => {
            let records = load_records(&records)?;
            print_json(&json!({
                "average_step_kph": slalom::average_tournament_speed_step(&records),
            }))
        }
        SlalomAction::Step { kph } => {
            print_json(&json!({ "step_kph": slalom::next_step_by_kph(kph) }))
        }
        SlalomAction::Decode { score } => print_json(&slalom::decompose_score(score)),
    }
}
