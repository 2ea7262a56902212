#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use minutes_core::{SummarySections, VersionSnapshot};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn meeting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minute)
}

pub fn snapshot(id: u64, minute: i64, sections: SummarySections) -> VersionSnapshot {
    VersionSnapshot {
        id,
        sections,
        editor: Some("田中".to_string()),
        created_at: at_minute(minute),
    }
}
