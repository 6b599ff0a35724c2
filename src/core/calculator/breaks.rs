//! Break detection for a single day.
//!
//! A break starts on a clock-out and ends on the next clock-in. The clock-in
//! is paired with its raw predecessor in the ascending list, so a passenger
//! event sitting right before the clock-in becomes the break start.

use crate::models::{AttendanceEvent, BreakInterval};
use crate::utils::formatting::{MILLIS_PER_MINUTE, millis_to_units2};

/// Whether the employee is currently at work or away on a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakState {
    Outside,
    Inside,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakInfo {
    pub breaks: Vec<BreakInterval>,
    pub total_minutes: f64,
    pub has_clock_out: bool,
}

/// Milliseconds elapsed between two events, always positive.
pub fn millis_between(a: &AttendanceEvent, b: &AttendanceEvent) -> i64 {
    (a.timestamp - b.timestamp).num_milliseconds().abs()
}

/// `events` must be sorted ascending by timestamp.
pub fn compute_breaks(events: &[AttendanceEvent]) -> BreakInfo {
    let mut state = BreakState::Outside;
    let mut breaks = Vec::new();
    let mut total_millis: i64 = 0;

    for (i, ev) in events.iter().enumerate() {
        if ev.status.is_in() {
            if state == BreakState::Inside {
                // a clock-in at index 0 has no predecessor to pair with
                if let Some(prev) = i.checked_sub(1).map(|p| &events[p]) {
                    let millis = millis_between(prev, ev);
                    total_millis = total_millis.saturating_add(millis);

                    breaks.push(BreakInterval {
                        out_event: prev.clone(),
                        in_event: ev.clone(),
                        minutes: millis_to_units2(millis, MILLIS_PER_MINUTE),
                    });
                } else {
                    tracing::debug!(at = %ev.timestamp, "clock-in without predecessor, no break recorded");
                }
            }
            state = BreakState::Outside;
        } else if ev.status.is_out() {
            state = BreakState::Inside;
        }
    }

    BreakInfo {
        breaks,
        total_minutes: millis_to_units2(total_millis, MILLIS_PER_MINUTE),
        has_clock_out: events.iter().any(|e| e.status.is_out()),
    }
}
