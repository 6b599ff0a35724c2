use crate::config::Config;
use crate::core::calculator::day_report;
use crate::errors::AppResult;
use crate::models::{AttendanceEvent, DayReport, EmployeeReport, FileReport};
use crate::source::EventSource;

pub struct Core;

impl Core {
    /// Pure step: one employee's events → day reports, newest day first.
    pub fn build_day_reports(events: &[AttendanceEvent]) -> Vec<DayReport> {
        day_report::build_day_reports(events)
    }

    /// Full run for one employee: read the selected export files and
    /// build the day reports of each file separately.
    pub fn build_employee_report(
        cfg: &Config,
        employee: &str,
        month: Option<u32>,
    ) -> AppResult<EmployeeReport> {
        let source = EventSource::new(cfg);
        let files = source.select_files(month)?;

        let mut report = EmployeeReport {
            employee: employee.trim().to_string(),
            files: Vec::with_capacity(files.len()),
        };

        for file in files {
            let events = source.read_events(&file, employee)?;
            let days = Self::build_day_reports(&events);

            tracing::debug!(
                file = %file.display(),
                events = events.len(),
                days = days.len(),
                "built day reports"
            );

            report.files.push(FileReport {
                file_name: file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                days,
            });
        }

        Ok(report)
    }
}
