use chrono::NaiveDate;
use clap::Args;
use prepyatra_core::{parse_prep_logs, Config};
use std::path::PathBuf;

use super::{read_input, resolve_today, CmdResult};

#[derive(Args)]
pub struct StreakArgs {
    /// Prep log listing (JSON), or `-` for stdin
    pub file: PathBuf,
    /// Evaluate as of this day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Print the full summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StreakArgs) -> CmdResult {
    let config = Config::load()?;
    let logs = parse_prep_logs(&read_input(&args.file)?)?;
    let today = resolve_today(&config, args.today)?;

    let summary = config.streak_calculator()?.summarize_on(&logs, today);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.current_streak);
    }
    Ok(())
}
