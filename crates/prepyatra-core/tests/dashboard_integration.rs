//! Integration tests for the dashboard workflow.
//!
//! Tests the path from a raw log listing, as returned by either backend,
//! to the figures shown on the dashboard.

use chrono::{NaiveDate, TimeZone, Utc};
use prepyatra_core::calendar::offset_from_minutes;
use prepyatra_core::{
    follow_ups_due, parse_contacts, parse_prep_logs, Config, CreatePrepLog, DashboardStats,
};

const SUPABASE_LISTING: &str = r#"[
    {"id":"5","user_id":"u1","log_date":"2024-05-15",
     "logs":["Mock interview"],"hours_in_minutes":60,
     "created_at":"2024-05-15T14:00:00+00:00","updated_at":"2024-05-15T14:00:00+00:00"},
    {"id":"4","user_id":"u1","log_date":"2024-05-14",
     "logs":["Graphs","Heaps"],"hours_in_minutes":90,
     "created_at":"2024-05-14T14:00:00+00:00","updated_at":"2024-05-14T14:00:00+00:00"},
    {"id":"3","user_id":"u1","log_date":"2024-05-14",
     "logs":["Revision"],"hours_in_minutes":15,
     "created_at":"2024-05-14T20:00:00+00:00","updated_at":"2024-05-14T20:00:00+00:00"},
    {"id":"2","user_id":"u1","log_date":"2024-05-13",
     "logs":["Resume"],"hours_in_minutes":30,
     "created_at":"2024-05-13T09:00:00+00:00","updated_at":"2024-05-13T09:00:00+00:00"},
    {"id":"1","user_id":"u1","log_date":"2024-05-01",
     "logs":["Kickoff"],"hours_in_minutes":45,
     "created_at":"2024-05-01T09:00:00+00:00","updated_at":"2024-05-01T09:00:00+00:00"}
]"#;

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

#[test]
fn test_full_dashboard_workflow() {
    let logs = parse_prep_logs(SUPABASE_LISTING).unwrap();
    let config = Config::default();
    let offset = config.offset().unwrap();

    let stats = DashboardStats::from_logs(&logs, may(15), offset, config.stats.recent_window_days);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.longest_streak, 3);
    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.total_sessions, 5);
    assert_eq!(stats.total_minutes, 240);
    assert_eq!(stats.recent_minutes, 195);
    assert_eq!(stats.total_time_display(), "4h 0m");

    // The next day the streak survives on the grace day, the day after it is gone.
    let next_day = DashboardStats::from_logs(&logs, may(16), offset, 7);
    assert_eq!(next_day.current_streak, 3);
    let two_days_later = DashboardStats::from_logs(&logs, may(17), offset, 7);
    assert_eq!(two_days_later.current_streak, 0);
    assert_eq!(two_days_later.longest_streak, 3);
}

#[test]
fn test_rest_backend_listing_uses_created_at() {
    let json = r#"{"status":true,"message":"Prep logs fetched","data":[
        {"_id":"b","title":"LLD","timeSpent":50,"createdAt":"2024-05-15T02:00:00.000Z"},
        {"_id":"a","title":"DSA","timeSpent":40,"createdAt":"2024-05-14T21:00:00.000Z"}
    ]}"#;
    let logs = parse_prep_logs(json).unwrap();

    // In UTC these fall on two different days.
    let utc_calc = Config::default().streak_calculator().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
    assert_eq!(utc_calc.summarize(&logs, now).current_streak, 2);

    // At +05:30 both land on the 15th.
    let mut config = Config::default();
    config
        .set_value("timezone.utc_offset_minutes", "330")
        .unwrap();
    let ist_calc = config.streak_calculator().unwrap();
    let summary = ist_calc.summarize(&logs, now);
    assert_eq!(summary.total_days, 1);
    assert_eq!(summary.current_streak, 1);
}

#[test]
fn test_listing_records_validate_as_payloads() {
    let logs = parse_prep_logs(SUPABASE_LISTING).unwrap();
    let offset = offset_from_minutes(0).unwrap();
    for log in &logs {
        assert!(CreatePrepLog::from(log).validate(offset).is_ok());
    }
}

#[test]
fn test_contact_follow_ups() {
    let json = r#"[
        {"id":"1","user_id":"u1","name":"Priya","company":"Initech","status":"Interviewing",
         "follow_up_date":"2024-05-12","created_at":"2024-05-01T00:00:00Z"},
        {"id":"2","user_id":"u1","name":"Karan","status":"Offer Letter",
         "follow_up_date":"2024-05-10","created_at":"2024-05-01T00:00:00Z"},
        {"id":"3","user_id":"u1","name":"Dev","follow_up_date":"2024-05-30",
         "created_at":"2024-05-01T00:00:00Z"}
    ]"#;
    let contacts = parse_contacts(json).unwrap();
    let due = follow_ups_due(&contacts, may(15), offset_from_minutes(0).unwrap());
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].contact.details.name, "Priya");
    assert_eq!(due[0].days_overdue, 3);
}
