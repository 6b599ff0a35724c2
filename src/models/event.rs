use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::event_status::EventStatus;

/// One row of an attendance terminal export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub name: String,             // ⇔ "Name"
    pub timestamp: NaiveDateTime, // ⇔ "Date/Time"
    pub status: EventStatus,      // ⇔ "Status"
    pub location: String,         // ⇔ "Location ID"
    pub verify_code: String,      // ⇔ "VerifyCode"
}

impl AttendanceEvent {
    pub fn new(name: &str, timestamp: NaiveDateTime, status: EventStatus) -> Self {
        Self {
            name: name.to_string(),
            timestamp,
            status,
            location: String::new(),
            verify_code: String::new(),
        }
    }

    /// Calendar day the event belongs to.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn date_time_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
