//! # PrepYatra Core Library
//!
//! This library provides the business logic behind the PrepYatra job-hunt
//! tracker. Records live in a remote service; this crate works on the
//! listings that service returns and derives what the dashboard shows.
//! The `prepyatra-cli` binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Streaks**: a pure function from a set of calendar days and "today"
//!   to the length of the current consecutive-day run
//! - **Calendar**: reduction of ISO dates and timestamps to calendar days in
//!   one reference offset
//! - **Records**: prep logs and recruiter contacts with their form validation
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_streak`]: Current streak of a set of dates
//! - [`StreakCalculator`]: Streak summaries over prep logs in a reference offset
//! - [`DashboardStats`]: Aggregates for the dashboard widget
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod error;
pub mod listing;
pub mod prep_log;
pub mod recruiter;
pub mod stats;
pub mod storage;
pub mod streak;

pub use calendar::{collect_dates, parse_calendar_date, today_in, DateCollection};
pub use error::{ConfigError, CoreError, ValidationError};
pub use prep_log::{parse_prep_logs, CreatePrepLog, PrepLog, UpdatePrepLog};
pub use recruiter::{
    follow_ups_due, parse_contacts, ContactStatus, CreateRecruiterContact, FollowUp,
    RecruiterContact,
};
pub use stats::DashboardStats;
pub use storage::Config;
pub use streak::{compute_streak, longest_streak, StreakCalculator, StreakSummary};
