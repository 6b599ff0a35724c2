//! Console rendering of day reports.

use crate::models::{AttendanceEvent, BreakInterval, DayReport, EmployeeReport, FileReport};
use crate::utils::colors::{CYAN, GREY, color_for_minutes, color_for_status, paint};
use crate::utils::formatting::{banner, bold, format_amount};
use std::fmt::Write;

const INDENT: &str = "         ";

pub struct Reporter {
    pub color: bool,
    pub separator: String,
}

impl Reporter {
    pub fn new(color: bool, separator: &str) -> Self {
        Self {
            color,
            separator: if separator.is_empty() {
                "*".to_string()
            } else {
                separator.to_string()
            },
        }
    }

    pub fn print(&self, report: &EmployeeReport) {
        print!("{}", self.render(report));
    }

    pub fn render(&self, report: &EmployeeReport) -> String {
        let mut out = String::new();

        let title = format!("Timelogs for {}", report.employee);
        let title = if self.color { bold(&title) } else { title };

        out.push('\n');
        out.push_str(&banner(&title, &self.separator, 19, 21));
        out.push_str("\n\n");

        for file in &report.files {
            self.render_file(&mut out, &report.employee, file);
        }

        out
    }

    fn render_file(&self, out: &mut String, employee: &str, file: &FileReport) {
        out.push('\n');
        out.push_str(&paint(&file.file_name, CYAN, self.color));
        out.push_str("\n\n");

        if file.days.is_empty() {
            let line = format!("No events for {employee}");
            out.push_str(&paint(&line, GREY, self.color));
            out.push_str("\n\n");
            return;
        }

        for day in &file.days {
            self.render_day(out, day);
        }
    }

    /// Last event, first event, hours, breaks, totals.
    pub fn render_day(&self, out: &mut String, day: &DayReport) {
        let _ = writeln!(
            out,
            "{} {}",
            day.last_event.date_time_str(),
            self.status(&day.last_event)
        );
        let _ = writeln!(
            out,
            "{INDENT}{} {}",
            day.first_event.time_str(),
            self.status(&day.first_event)
        );

        if let Some(hours) = day.hours_worked {
            let _ = writeln!(out, "{INDENT}Total Hours Worked: {}", format_amount(hours));
        }

        out.push('\n');

        for b in &day.breaks {
            self.render_break(out, b);
        }

        if !day.has_clock_out {
            let _ = writeln!(out, "{INDENT}{}", paint("**No out**", GREY, self.color));
            out.push('\n');
        }

        let total = format_amount(day.total_break_minutes);
        let _ = writeln!(
            out,
            "{INDENT}Total Break Min(s): {}",
            paint(&total, color_for_minutes(day.total_break_minutes), self.color)
        );
        out.push('\n');
    }

    fn render_break(&self, out: &mut String, b: &BreakInterval) {
        out.push('\n');
        let _ = writeln!(
            out,
            "{INDENT}{} {}",
            b.out_event.time_str(),
            self.status(&b.out_event)
        );
        let _ = writeln!(
            out,
            "{INDENT}{} {}",
            b.in_event.time_str(),
            self.status(&b.in_event)
        );
        let _ = writeln!(out, "{INDENT}break: {} min(s)", format_amount(b.minutes));
        out.push('\n');
    }

    fn status(&self, ev: &AttendanceEvent) -> String {
        paint(
            ev.status.as_export_str(),
            color_for_status(&ev.status),
            self.color,
        )
    }
}
