use clap::Args;
use setlog_core::{sort_tasks, Task};
use std::path::PathBuf;

use super::{parse_now, print_json, read_json, CliResult};

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// JSON file with an array of tasks
    #[arg(long)]
    pub tasks: PathBuf,
    /// Order as of this day instead of today, YYYY-MM-DD
    #[arg(long)]
    pub now: Option<String>,
}

pub fn run(args: TasksArgs) -> CliResult {
    let mut tasks: Vec<Task> = read_json(&args.tasks)?;
    sort_tasks(&mut tasks, parse_now(args.now.as_deref())?);
    print_json(&tasks)
}
