use clap::{Args, ValueEnum};
use prepyatra_core::{parse_contacts, parse_prep_logs, Config, CreatePrepLog, ValidationError};
use std::path::PathBuf;

use super::{read_input, CmdResult};

#[derive(Clone, Copy, ValueEnum)]
pub enum ListingKind {
    Logs,
    Contacts,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Listing (JSON), or `-` for stdin
    pub file: PathBuf,
    /// What the listing contains
    #[arg(long, value_enum, default_value = "logs")]
    pub kind: ListingKind,
}

pub fn run(args: ValidateArgs) -> CmdResult {
    let config = Config::load()?;
    let offset = config.offset()?;
    let input = read_input(&args.file)?;

    let problems: Vec<(String, Vec<ValidationError>)> = match args.kind {
        ListingKind::Logs => parse_prep_logs(&input)?
            .iter()
            .map(|log| {
                let errors = CreatePrepLog::from(log).validation_errors(offset);
                (log.id.clone(), errors)
            })
            .collect(),
        ListingKind::Contacts => parse_contacts(&input)?
            .iter()
            .map(|c| (c.id.clone(), c.details.validation_errors(offset)))
            .collect(),
    };

    let total = problems.len();
    let mut invalid = 0;
    for (id, errors) in &problems {
        if errors.is_empty() {
            continue;
        }
        invalid += 1;
        for e in errors {
            println!("{id}: {e}");
        }
    }

    if invalid > 0 {
        return Err(format!("{invalid} of {total} records are invalid").into());
    }
    println!("{total} records ok");
    Ok(())
}
