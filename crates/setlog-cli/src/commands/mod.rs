pub mod config;
pub mod filter;
pub mod report;
pub mod slalom;
pub mod tasks;

use chrono::NaiveDate;
use clap::Args;
use serde::de::DeserializeOwned;
use setlog_core::{date, FilterOptions, TimeWindow};
use std::path::Path;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Window selection shared by `report` and `filter`.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// day, week, month, season or custom (defaults to the configured window)
    #[arg(long)]
    pub window: Option<String>,
    /// Custom window start, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,
    /// Custom window end, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,
    /// Compute as of this day instead of today, YYYY-MM-DD
    #[arg(long)]
    pub now: Option<String>,
}

impl WindowArgs {
    pub fn resolve(
        &self,
        default_window: TimeWindow,
    ) -> Result<(TimeWindow, FilterOptions), Box<dyn std::error::Error>> {
        let window = match &self.window {
            Some(name) => name.parse::<TimeWindow>()?,
            None => default_window,
        };
        let options = FilterOptions {
            custom_start: parse_bound(self.from.as_deref())?,
            custom_end: parse_bound(self.to.as_deref())?,
            now: parse_now(self.now.as_deref())?,
        };
        Ok((window, options))
    }
}

pub fn parse_now(now: Option<&str>) -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
    Ok(now.map(date::parse_iso).transpose()?)
}

/// Custom window bound in canonical form. A time suffix is allowed and
/// dropped; anything that is not a zero-padded date is rejected.
fn parse_bound(bound: Option<&str>) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let day = bound
        .map(|b| date::parse_iso(date::date_part(b)))
        .transpose()?;
    Ok(day.map(date::to_iso))
}

/// Read a JSON array exported by the backend.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let parsed = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded input file");
    Ok(parsed)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
