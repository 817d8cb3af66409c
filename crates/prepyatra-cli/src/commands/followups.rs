use chrono::NaiveDate;
use clap::Args;
use prepyatra_core::{follow_ups_due, parse_contacts, Config};
use std::path::PathBuf;

use super::{read_input, resolve_today, CmdResult};

#[derive(Args)]
pub struct FollowupsArgs {
    /// Recruiter contact listing (JSON), or `-` for stdin
    pub file: PathBuf,
    /// Evaluate as of this day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FollowupsArgs) -> CmdResult {
    let config = Config::load()?;
    let contacts = parse_contacts(&read_input(&args.file)?)?;
    let today = resolve_today(&config, args.today)?;

    let due = follow_ups_due(&contacts, today, config.offset()?);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&due)?);
        return Ok(());
    }

    if due.is_empty() {
        println!("No follow-ups due.");
        return Ok(());
    }
    for item in &due {
        let details = &item.contact.details;
        let company = details.company.as_deref().unwrap_or("-");
        let status = details
            .status
            .map(|s| s.label())
            .unwrap_or("No status");
        println!(
            "{}  {} ({})  [{}]  {} day(s) overdue",
            item.due_date, details.name, company, status, item.days_overdue
        );
    }
    Ok(())
}
