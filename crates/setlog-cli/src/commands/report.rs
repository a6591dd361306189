use clap::Args;
use setlog_core::{apply_default_speed_unit, Config, DashboardReport, Record};
use std::path::PathBuf;

use super::{print_json, read_json, CliResult, WindowArgs};

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON file with an array of records
    #[arg(long)]
    pub records: PathBuf,
    #[command(flatten)]
    pub window: WindowArgs,
    /// Months in the monthly progress view (defaults to config)
    #[arg(long)]
    pub months: Option<usize>,
}

pub fn run(args: ReportArgs) -> CliResult {
    let config = Config::load_or_default();
    let mut records: Vec<Record> = read_json(&args.records)?;
    apply_default_speed_unit(&mut records, config.slalom.default_speed_unit);
    let (window, options) = args.window.resolve(config.stats.default_window)?;
    let months = args.months.unwrap_or_else(|| config.monthly_months());

    let report = DashboardReport::build(&records, window, &options, months);
    print_json(&report)
}
