//! Prep logs: one record per logged preparation session.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;
use crate::error::{Result, ValidationError};
use crate::listing::parse_listing;

/// A prep log as returned by the log-listing API.
///
/// Field aliases cover the camelCase names used by the REST backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepLog {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "userId")]
    pub user_id: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default, alias = "logDate")]
    pub log_date: String,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default, alias = "timeSpent")]
    pub hours_in_minutes: u32,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PrepLog {
    /// The raw date this log counts towards.
    ///
    /// Records from the REST backend carry no `log_date`; their creation
    /// timestamp stands in for it.
    pub fn date_value(&self) -> &str {
        if self.log_date.trim().is_empty() {
            self.created_at.as_deref().unwrap_or("")
        } else {
            &self.log_date
        }
    }

    /// Calendar day of this log in `offset`.
    pub fn calendar_date(&self, offset: FixedOffset) -> Result<NaiveDate, ValidationError> {
        parse_calendar_date(self.date_value(), offset)
    }
}

/// Decode a log listing (bare array or REST envelope).
pub fn parse_prep_logs(json: &str) -> Result<Vec<PrepLog>> {
    parse_listing(json)
}

/// Newest first, the order the listing service returns.
///
/// Logs with unparseable dates sink to the end in their original order.
pub fn sort_by_date_desc(logs: &mut [PrepLog], offset: FixedOffset) {
    logs.sort_by_cached_key(|log| std::cmp::Reverse(log.calendar_date(offset).ok()));
}

/// Payload for creating a prep log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePrepLog {
    pub log_date: String,
    pub logs: Vec<String>,
    pub hours_in_minutes: u32,
}

impl CreatePrepLog {
    /// Every problem with the payload, in field order.
    pub fn validation_errors(&self, offset: FixedOffset) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Err(e) = parse_calendar_date(&self.log_date, offset) {
            errors.push(e);
        }
        if let Err(e) = check_entries(&self.logs) {
            errors.push(e);
        }
        if let Err(e) = check_minutes(self.hours_in_minutes) {
            errors.push(e);
        }
        errors
    }

    /// Fail on the first problem with the payload.
    pub fn validate(&self, offset: FixedOffset) -> Result<(), ValidationError> {
        match self.validation_errors(offset).into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Copy with blank entries dropped and the rest trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            log_date: self.log_date.trim().to_string(),
            logs: normalize_entries(&self.logs),
            hours_in_minutes: self.hours_in_minutes,
        }
    }
}

impl From<&PrepLog> for CreatePrepLog {
    fn from(log: &PrepLog) -> Self {
        Self {
            log_date: log.date_value().to_string(),
            logs: log.logs.clone(),
            hours_in_minutes: log.hours_in_minutes,
        }
    }
}

/// Partial update of a prep log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePrepLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_in_minutes: Option<u32>,
}

impl UpdatePrepLog {
    /// Validate only the fields that are present.
    pub fn validate(&self, offset: FixedOffset) -> Result<(), ValidationError> {
        if let Some(date) = &self.log_date {
            parse_calendar_date(date, offset)?;
        }
        if let Some(entries) = &self.logs {
            check_entries(entries)?;
        }
        if let Some(minutes) = self.hours_in_minutes {
            check_minutes(minutes)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.log_date.is_none() && self.logs.is_none() && self.hours_in_minutes.is_none()
    }

    /// Overwrite the present fields of `log`.
    pub fn apply_to(&self, log: &mut PrepLog) {
        if let Some(date) = &self.log_date {
            log.log_date = date.trim().to_string();
        }
        if let Some(entries) = &self.logs {
            log.logs = normalize_entries(entries);
        }
        if let Some(minutes) = self.hours_in_minutes {
            log.hours_in_minutes = minutes;
        }
    }
}

fn normalize_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_entries(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().all(|entry| entry.trim().is_empty()) {
        return Err(ValidationError::invalid(
            "logs",
            "At least one log point is required.",
        ));
    }
    Ok(())
}

fn check_minutes(minutes: u32) -> Result<(), ValidationError> {
    if minutes == 0 {
        return Err(ValidationError::invalid(
            "hours_in_minutes",
            "Hours must be a positive number.",
        ));
    }
    Ok(())
}
