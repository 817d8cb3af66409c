//! Calendar-day handling.
//!
//! Log dates arrive from the log-listing API either as plain `YYYY-MM-DD`
//! strings or as full RFC 3339 timestamps. Everything downstream compares
//! whole days, so both forms are reduced to a [`NaiveDate`] in one fixed
//! reference offset.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use std::collections::BTreeSet;
use tracing::warn;

use crate::error::ValidationError;

/// Largest accepted distance from UTC, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// The reference offset used when none is configured.
pub fn utc() -> FixedOffset {
    Utc.fix()
}

/// Build a reference offset from a signed number of minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ValidationError> {
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(ValidationError::invalid(
            "utc_offset_minutes",
            format!("{minutes} is outside ±{MAX_UTC_OFFSET_MINUTES}"),
        ));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| ValidationError::invalid("utc_offset_minutes", "offset out of range"))
}

/// Parse a raw date string into a calendar day in `offset`.
///
/// `YYYY-MM-DD` is taken as-is. An RFC 3339 timestamp is first moved into
/// `offset` and then truncated, so `2024-03-01T23:30:00Z` is March 2nd at
/// `+01:00`.
pub fn parse_calendar_date(raw: &str, offset: FixedOffset) -> Result<NaiveDate, ValidationError> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&offset).date_naive());
    }
    Err(ValidationError::InvalidDate {
        value: raw.to_string(),
    })
}

/// The calendar day that `now` falls on in `offset`.
pub fn today_in(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Distinct calendar days gathered from raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCollection {
    pub dates: BTreeSet<NaiveDate>,
    /// Raw values that could not be parsed, in input order.
    pub rejected: Vec<String>,
}

/// Parse every raw date, dropping duplicates and keeping the failures aside.
pub fn collect_dates<'a, I>(raw_dates: I, offset: FixedOffset) -> DateCollection
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collection = DateCollection::default();
    for raw in raw_dates {
        match parse_calendar_date(raw, offset) {
            Ok(date) => {
                collection.dates.insert(date);
            }
            Err(e) => {
                warn!(value = raw, error = %e, "skipping unparseable log date");
                collection.rejected.push(raw.to_string());
            }
        }
    }
    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(
            parse_calendar_date("2024-03-01", utc()).unwrap(),
            date(2024, 3, 1)
        );
        assert_eq!(
            parse_calendar_date("  2024-03-01\n", utc()).unwrap(),
            date(2024, 3, 1)
        );
    }

    #[test]
    fn test_plain_date_ignores_offset() {
        let offset = offset_from_minutes(-8 * 60).unwrap();
        assert_eq!(
            parse_calendar_date("2024-03-01", offset).unwrap(),
            date(2024, 3, 1)
        );
    }

    #[test]
    fn test_timestamp_near_midnight() {
        let raw = "2024-03-01T23:30:00Z";
        assert_eq!(parse_calendar_date(raw, utc()).unwrap(), date(2024, 3, 1));

        let ist = offset_from_minutes(330).unwrap();
        assert_eq!(parse_calendar_date(raw, ist).unwrap(), date(2024, 3, 2));

        let pst = offset_from_minutes(-8 * 60).unwrap();
        assert_eq!(
            parse_calendar_date("2024-03-01T05:00:00+00:00", pst).unwrap(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_invalid_dates() {
        for raw in ["", "yesterday", "2024-13-01", "2024-02-30", "01/03/2024"] {
            let err = parse_calendar_date(raw, utc()).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidDate {
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert!(offset_from_minutes(MAX_UTC_OFFSET_MINUTES).is_ok());
        assert!(offset_from_minutes(-MAX_UTC_OFFSET_MINUTES).is_ok());
        assert!(offset_from_minutes(MAX_UTC_OFFSET_MINUTES + 1).is_err());
    }

    #[test]
    fn test_today_in_offset() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 20, 0, 0).unwrap();
        assert_eq!(today_in(now, utc()), date(2024, 6, 30));
        assert_eq!(
            today_in(now, offset_from_minutes(5 * 60).unwrap()),
            date(2024, 7, 1)
        );
    }

    #[test]
    fn test_collect_dates_dedupes_and_rejects() {
        let raw = [
            "2024-03-01",
            "2024-03-01T10:00:00Z",
            "not a date",
            "2024-03-02",
        ];
        let collection = collect_dates(raw, utc());
        assert_eq!(collection.dates.len(), 2);
        assert_eq!(collection.rejected, vec!["not a date".to_string()]);
    }
}
