use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "setlog", version, about = "setlog training analytics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard report for a records file
    Report(commands::report::ReportArgs),
    /// Print the records falling in a time window
    Filter(commands::filter::FilterArgs),
    /// Slalom scoring tools
    Slalom {
        #[command(subcommand)]
        action: commands::slalom::SlalomAction,
    },
    /// Print tasks in display order
    Tasks(commands::tasks::TasksArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Slalom { action } => commands::slalom::run(action),
        Commands::Tasks(args) => commands::tasks::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
