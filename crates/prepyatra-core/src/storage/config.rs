//! TOML-based application configuration.
//!
//! Stores the settings that decide how log dates turn into calendar days
//! and how the dashboard aggregates them:
//! - Reference timezone offset
//! - Width of the recent-minutes window
//!
//! Configuration is stored at `~/.config/prepyatra/config.toml`.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::calendar::offset_from_minutes;
use crate::error::ConfigError;
use crate::stats::DEFAULT_RECENT_WINDOW_DAYS;
use crate::streak::StreakCalculator;

/// Reference timezone configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneConfig {
    /// Minutes east of UTC. Calendar days are compared in this offset.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Dashboard statistics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
}

fn default_recent_window_days() -> u32 {
    DEFAULT_RECENT_WINDOW_DAYS
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: default_recent_window_days(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/prepyatra/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timezone: TimezoneConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none_or(|p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .trim()
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        offset_from_minutes(self.timezone.utc_offset_minutes).map_err(|e| {
            ConfigError::InvalidValue {
                key: "timezone.utc_offset_minutes".to_string(),
                message: e.to_string(),
            }
        })?;
        if self.stats.recent_window_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "stats.recent_window_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing the defaults there if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without persisting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is unparseable
    /// or out of range. `self` is left untouched on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Reference offset for calendar days.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        offset_from_minutes(self.timezone.utc_offset_minutes).map_err(|e| {
            ConfigError::InvalidValue {
                key: "timezone.utc_offset_minutes".to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn streak_calculator(&self) -> Result<StreakCalculator, ConfigError> {
        Ok(StreakCalculator::with_offset(self.offset()?))
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.timezone.utc_offset_minutes, 0);
        assert_eq!(parsed.stats.recent_window_days, 7);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[timezone]\nutc_offset_minutes = 330\n").unwrap();
        assert_eq!(parsed.timezone.utc_offset_minutes, 330);
        assert_eq!(parsed.stats.recent_window_days, 7);
    }

    #[test]
    fn get_by_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("stats.recent_window_days").as_deref(), Some("7"));
        assert_eq!(cfg.get("timezone.utc_offset_minutes").as_deref(), Some("0"));
        assert_eq!(cfg.get("nope"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn set_value_by_path() {
        let mut cfg = Config::default();
        cfg.set_value("timezone.utc_offset_minutes", "-300").unwrap();
        assert_eq!(cfg.timezone.utc_offset_minutes, -300);
        assert_eq!(
            cfg.offset().unwrap(),
            FixedOffset::west_opt(5 * 3600).unwrap()
        );
    }

    #[test]
    fn set_value_rejects_bad_input() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set_value("timezone.missing", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set_value("timezone", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set_value("stats.recent_window_days", "abc"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set_value("stats.recent_window_days", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set_value("timezone.utc_offset_minutes", "5000"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.set_value("stats.recent_window_days", "14").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().stats.recent_window_days, 14);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timezone = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
