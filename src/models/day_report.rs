use chrono::NaiveDate;
use serde::Serialize;

use super::event::AttendanceEvent;

/// Time away from work between a clock-out and the following clock-in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BreakInterval {
    pub out_event: AttendanceEvent,
    pub in_event: AttendanceEvent,
    pub minutes: f64,
}

/// Per-day summary built by the day report builder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayReport {
    pub day: NaiveDate,
    pub first_event: AttendanceEvent,
    pub last_event: AttendanceEvent,
    /// Present only when the day contains at least one clock-out.
    pub hours_worked: Option<f64>,
    pub breaks: Vec<BreakInterval>,
    pub total_break_minutes: f64,
    pub has_clock_out: bool,
}
