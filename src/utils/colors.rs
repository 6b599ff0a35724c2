//! ANSI color helper utilities for terminal output.

use crate::models::EventStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// C/In → green, C/Out → red, passengers → grey.
pub fn color_for_status(status: &EventStatus) -> &'static str {
    match status {
        EventStatus::ClockIn => GREEN,
        EventStatus::ClockOut => RED,
        EventStatus::Other(_) => GREY,
    }
}

/// Wrap `value` in `color` when `enabled`, plain text otherwise.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && !value.is_empty() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Break minutes: zero → grey, otherwise yellow.
pub fn color_for_minutes(value: f64) -> &'static str {
    if value == 0.0 { GREY } else { YELLOW }
}
