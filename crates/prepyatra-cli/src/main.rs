use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "prepyatra-cli", version, about = "PrepYatra CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current prep streak from a log listing
    Streak(commands::streak::StreakArgs),
    /// Dashboard statistics from a log listing
    Stats(commands::stats::StatsArgs),
    /// Check every record of a listing against the form rules
    Validate(commands::validate::ValidateArgs),
    /// Recruiter contacts due for a follow-up
    Followups(commands::followups::FollowupsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PREPYATRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Followups(args) => commands::followups::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
