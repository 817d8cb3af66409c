//! Consecutive-day streaks over prep log dates.
//!
//! A streak is the number of consecutive calendar days, ending today or
//! yesterday, on which at least one prep log exists. Yesterday counts as a
//! grace day: a user who has not logged yet today keeps their streak until
//! the day is over.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::calendar::{self, collect_dates};
use crate::prep_log::PrepLog;

/// Length of the run of consecutive days ending at `today` or the day before.
///
/// Returns 0 when the set is empty or when the latest date in the set is
/// neither `today` nor yesterday. A latest date after `today` also gives 0.
pub fn compute_streak(log_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let (Some(&oldest), Some(&most_recent)) = (log_dates.first(), log_dates.last()) else {
        return 0;
    };
    let alive = most_recent == today || today.pred_opt() == Some(most_recent);
    if !alive {
        return 0;
    }

    // most_recent is today when today is logged, else yesterday.
    let anchor = most_recent;

    let mut cursor = anchor;
    let mut count = 1;
    while cursor > oldest {
        match cursor.pred_opt() {
            Some(prev) if log_dates.contains(&prev) => {
                count += 1;
                cursor = prev;
            }
            _ => break,
        }
    }
    count
}

/// Longest run of consecutive days anywhere in the set.
pub fn longest_streak(log_dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in log_dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Streak figures for one user's log history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Distinct days with at least one log
    pub total_days: u32,
    pub last_log_date: Option<NaiveDate>,
}

impl StreakSummary {
    pub fn from_dates(log_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            current_streak: compute_streak(log_dates, today),
            longest_streak: longest_streak(log_dates),
            total_days: u32::try_from(log_dates.len()).unwrap_or(u32::MAX),
            last_log_date: log_dates.last().copied(),
        }
    }
}

/// Streak calculator bound to a reference timezone.
///
/// Turns wall-clock instants and raw log dates into calendar days in one
/// fixed offset before handing them to [`compute_streak`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakCalculator {
    offset: FixedOffset,
}

impl StreakCalculator {
    /// Create a calculator that compares days in UTC
    pub fn new() -> Self {
        Self {
            offset: calendar::utc(),
        }
    }

    /// Create with a custom reference offset
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The calendar day `now` falls on in the reference offset.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        calendar::today_in(now, self.offset)
    }

    /// Distinct calendar days of `logs`. Unparseable dates are skipped.
    pub fn log_dates(&self, logs: &[PrepLog]) -> BTreeSet<NaiveDate> {
        collect_dates(logs.iter().map(PrepLog::date_value), self.offset).dates
    }

    /// Current streak of `logs` as of `today`.
    pub fn current_streak(&self, logs: &[PrepLog], today: NaiveDate) -> u32 {
        compute_streak(&self.log_dates(logs), today)
    }

    /// Full summary of `logs` as of `today`.
    pub fn summarize_on(&self, logs: &[PrepLog], today: NaiveDate) -> StreakSummary {
        let summary = StreakSummary::from_dates(&self.log_dates(logs), today);
        debug!(
            %today,
            current = summary.current_streak,
            longest = summary.longest_streak,
            total_days = summary.total_days,
            "computed streak summary"
        );
        summary
    }

    /// Full summary of `logs` as of the instant `now`.
    pub fn summarize(&self, logs: &[PrepLog], now: DateTime<Utc>) -> StreakSummary {
        self.summarize_on(logs, self.today(now))
    }
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}
