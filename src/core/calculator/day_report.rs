use crate::core::calculator::breaks::{compute_breaks, millis_between};
use crate::models::{AttendanceEvent, DayReport};
use crate::utils::formatting::{MILLIS_PER_HOUR, millis_to_units2};
use chrono::NaiveDate;

/// Progress of the descending walk over the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// The day was just entered and its report is still to be emitted.
    Scanning,
    /// The full day group has been emitted; remaining events of the day are skipped.
    DayEmitted,
}

/// Build one report per calendar day present in `events`, newest day first.
///
/// Events may come in any order. A day is emitted on the first event seen for
/// it, so days holding a single event are reported too.
pub fn build_day_reports(events: &[AttendanceEvent]) -> Vec<DayReport> {
    if events.is_empty() {
        return Vec::new();
    }

    // -----------------------------
    // Walk newest → oldest
    // -----------------------------
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut reports = Vec::new();
    let mut current_day: Option<NaiveDate> = None;
    let mut state = DayState::DayEmitted;

    for ev in &sorted {
        let day = ev.day();

        if current_day != Some(day) {
            current_day = Some(day);
            state = DayState::Scanning;
        }

        if state == DayState::Scanning {
            let day_events: Vec<AttendanceEvent> =
                sorted.iter().filter(|e| e.day() == day).cloned().collect();

            reports.extend(build_single_day(day, day_events));
            state = DayState::DayEmitted;
        }
    }

    reports
}

/// Summarize the events of one calendar day. Returns `None` for an empty group.
pub fn build_single_day(day: NaiveDate, mut events: Vec<AttendanceEvent>) -> Option<DayReport> {
    // breaks need out → in order
    events.sort_by_key(|e| e.timestamp);

    let first = events.first()?.clone();
    let last = events.last()?.clone();

    let info = compute_breaks(&events);

    let hours_worked = info
        .has_clock_out
        .then(|| millis_to_units2(millis_between(&last, &first), MILLIS_PER_HOUR));

    Some(DayReport {
        day,
        first_event: first,
        last_event: last,
        hours_worked,
        breaks: info.breaks,
        total_break_minutes: info.total_minutes,
        has_clock_out: info.has_clock_out,
    })
}
