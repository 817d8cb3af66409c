//! Recruiter contacts and their pipeline status.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::calendar::parse_calendar_date;
use crate::error::{Result, ValidationError};
use crate::listing::parse_listing;

/// Where a contact stands in the hiring pipeline.
///
/// Serialized with the labels the UI shows. The aliases accept the labels
/// of the earlier "recruitment" table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactStatus {
    #[serde(rename = "Screening in Process", alias = "Screening")]
    ScreeningInProcess,
    #[serde(rename = "Interviewing")]
    Interviewing,
    #[serde(rename = "Final Round Offer", alias = "Last Round Pending")]
    FinalRoundOffer,
    #[serde(rename = "Offer Letter")]
    OfferLetter,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 5] = [
        ContactStatus::ScreeningInProcess,
        ContactStatus::Interviewing,
        ContactStatus::FinalRoundOffer,
        ContactStatus::OfferLetter,
        ContactStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::ScreeningInProcess => "Screening in Process",
            ContactStatus::Interviewing => "Interviewing",
            ContactStatus::FinalRoundOffer => "Final Round Offer",
            ContactStatus::OfferLetter => "Offer Letter",
            ContactStatus::Rejected => "Rejected",
        }
    }

    /// No further follow-up is expected once a contact reaches this status.
    pub fn is_closed(&self) -> bool {
        matches!(self, ContactStatus::OfferLetter | ContactStatus::Rejected)
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContactStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid("status", format!("unknown status '{wanted}'"))
            })
    }
}

/// A recruiter contact as returned by the contact-listing API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterContact {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "userId")]
    pub user_id: String,
    #[serde(flatten)]
    pub details: CreateRecruiterContact,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Editable fields of a recruiter contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecruiterContact {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        alias = "applicationStatus",
        alias = "interview_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ContactStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(
        default,
        alias = "interview_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_interview_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, alias = "notes", skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl CreateRecruiterContact {
    /// Every problem with the payload, in field order.
    pub fn validation_errors(&self, offset: FixedOffset) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::Required {
                field: "name".to_string(),
            });
        }
        if let Some(email) = present(&self.email) {
            if !looks_like_email(email) {
                errors.push(ValidationError::invalid(
                    "email",
                    format!("'{email}' is not an email address"),
                ));
            }
        }
        for date in [&self.follow_up_date, &self.last_interview_date] {
            if let Some(raw) = present(date) {
                if let Err(e) = parse_calendar_date(raw, offset) {
                    errors.push(e);
                }
            }
        }
        if let Some(link) = present(&self.link) {
            if !(link.starts_with("http://") || link.starts_with("https://")) {
                errors.push(ValidationError::invalid(
                    "link",
                    "must start with http:// or https://",
                ));
            }
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
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Decode a contact listing (bare array or REST envelope).
pub fn parse_contacts(json: &str) -> Result<Vec<RecruiterContact>> {
    parse_listing(json)
}

/// A contact whose follow-up date has arrived.
#[derive(Debug, Clone, Serialize)]
pub struct FollowUp<'a> {
    pub contact: &'a RecruiterContact,
    pub due_date: NaiveDate,
    /// 0 when due today
    pub days_overdue: i64,
}

/// Open contacts with a follow-up on or before `today`, oldest first.
///
/// Closed contacts (offer letter, rejected) and contacts without a usable
/// follow-up date are left out.
pub fn follow_ups_due(
    contacts: &[RecruiterContact],
    today: NaiveDate,
    offset: FixedOffset,
) -> Vec<FollowUp<'_>> {
    let mut due: Vec<FollowUp<'_>> = contacts
        .iter()
        .filter(|c| !c.details.status.is_some_and(|s| s.is_closed()))
        .filter_map(|contact| {
            let raw = present(&contact.details.follow_up_date)?;
            let due_date = match parse_calendar_date(raw, offset) {
                Ok(date) => date,
                Err(e) => {
                    warn!(id = %contact.id, error = %e, "skipping contact follow-up");
                    return None;
                }
            };
            (due_date <= today).then(|| FollowUp {
                contact,
                due_date,
                days_overdue: (today - due_date).num_days(),
            })
        })
        .collect();
    due.sort_by_key(|f| f.due_date);
    due
}
