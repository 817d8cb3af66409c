use chrono::NaiveDate;
use clap::Args;
use prepyatra_core::{parse_prep_logs, Config, DashboardStats};
use std::path::PathBuf;

use super::{read_input, resolve_today, CmdResult};

#[derive(Args)]
pub struct StatsArgs {
    /// Prep log listing (JSON), or `-` for stdin
    pub file: PathBuf,
    /// Evaluate as of this day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Override `stats.recent_window_days`
    #[arg(long)]
    pub window: Option<u32>,
}

pub fn run(args: StatsArgs) -> CmdResult {
    let config = Config::load()?;
    let logs = parse_prep_logs(&read_input(&args.file)?)?;
    let today = resolve_today(&config, args.today)?;
    let window = args.window.unwrap_or(config.stats.recent_window_days);

    let stats = DashboardStats::from_logs(&logs, today, config.offset()?, window);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
