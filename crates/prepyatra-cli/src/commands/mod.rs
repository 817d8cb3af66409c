pub mod config;
pub mod followups;
pub mod stats;
pub mod streak;
pub mod validate;

use chrono::{NaiveDate, Utc};
use prepyatra_core::Config;
use std::io::Read;
use std::path::Path;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Read a listing from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()).into())
}

/// `--today` if given, else the current day in the configured offset.
pub fn resolve_today(
    config: &Config,
    today: Option<NaiveDate>,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match today {
        Some(date) => Ok(date),
        None => Ok(config.streak_calculator()?.today(Utc::now())),
    }
}
