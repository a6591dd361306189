use clap::Args;
use setlog_core::{apply_default_speed_unit, filter_records, Config, Record};
use std::path::PathBuf;

use super::{print_json, read_json, CliResult, WindowArgs};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// JSON file with an array of records
    #[arg(long)]
    pub records: PathBuf,
    #[command(flatten)]
    pub window: WindowArgs,
}

pub fn run(args: FilterArgs) -> CliResult {
    let config = Config::load_or_default();
    let mut records: Vec<Record> = read_json(&args.records)?;
    apply_default_speed_unit(&mut records, config.slalom.default_speed_unit);
    let (window, options) = args.window.resolve(config.stats.default_window)?;

    let selected = filter_records(&records, window, &options);
    print_json(&selected)
}
