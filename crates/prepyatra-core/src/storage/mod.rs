mod config;

pub use config::{Config, StatsConfig, TimezoneConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/prepyatra[-dev]/` based on PREPYATRA_ENV.
///
/// Set PREPYATRA_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PREPYATRA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("prepyatra-dev")
    } else {
        base_dir.join("prepyatra")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
