//! Dashboard statistics derived from a prep log listing.

use chrono::{Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::prep_log::PrepLog;
use crate::streak::{compute_streak, longest_streak};

/// Default width of the "recent minutes" window.
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 7;

/// Figures shown on the dashboard widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Distinct days with at least one log
    pub total_days: u32,
    /// Number of log records with a usable date
    pub total_sessions: u32,
    pub total_minutes: u64,
    /// Minutes logged within the last `recent_window_days` days, today included
    pub recent_minutes: u64,
    pub recent_window_days: u32,
    pub last_log_date: Option<NaiveDate>,
    /// Records left out because their date could not be parsed
    pub skipped_records: u32,
}

impl DashboardStats {
    /// Aggregate `logs` as of `today`.
    ///
    /// A window of 0 days is treated as 1.
    pub fn from_logs(
        logs: &[PrepLog],
        today: NaiveDate,
        offset: FixedOffset,
        window_days: u32,
    ) -> Self {
        let window_days = window_days.max(1);
        let window_start = today
            .checked_sub_signed(Duration::days(i64::from(window_days) - 1))
            .unwrap_or(NaiveDate::MIN);

        let mut dates = BTreeSet::new();
        let mut stats = DashboardStats {
            recent_window_days: window_days,
            ..DashboardStats::default()
        };

        for log in logs {
            let date = match log.calendar_date(offset) {
                Ok(date) => date,
                Err(e) => {
                    warn!(id = %log.id, error = %e, "skipping prep log in stats");
                    stats.skipped_records += 1;
                    continue;
                }
            };

            let minutes = u64::from(log.hours_in_minutes);
            stats.total_sessions += 1;
            stats.total_minutes += minutes;
            if (window_start..=today).contains(&date) {
                stats.recent_minutes += minutes;
            }
            dates.insert(date);
        }

        stats.current_streak = compute_streak(&dates, today);
        stats.longest_streak = longest_streak(&dates);
        stats.total_days = u32::try_from(dates.len()).unwrap_or(u32::MAX);
        stats.last_log_date = dates.last().copied();

        debug!(
            %today,
            sessions = stats.total_sessions,
            skipped = stats.skipped_records,
            "computed dashboard stats"
        );
        stats
    }

    /// Total time formatted as `"<h>h <m>m"`.
    pub fn total_time_display(&self) -> String {
        format_minutes(self.total_minutes)
    }
}

/// Format a minute count as `"<h>h <m>m"`.
pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
