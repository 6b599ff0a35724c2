// src/export/model.rs

use crate::models::{DayReport, EmployeeReport};
use serde::Serialize;

/// Flat row of a day report, one per day and export file.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayReportExport {
    pub employee: String,
    pub file: String,
    pub day: String,
    pub first_event: String,
    pub first_status: String,
    pub last_event: String,
    pub last_status: String,
    pub hours_worked: Option<f64>,
    pub breaks: usize,
    pub total_break_minutes: f64,
    pub has_clock_out: bool,
}

impl DayReportExport {
    pub fn from_day(employee: &str, file: &str, day: &DayReport) -> Self {
        Self {
            employee: employee.to_string(),
            file: file.to_string(),
            day: day.day.format("%Y-%m-%d").to_string(),
            first_event: day.first_event.date_time_str(),
            first_status: day.first_event.status.as_export_str().to_string(),
            last_event: day.last_event.date_time_str(),
            last_status: day.last_event.status.as_export_str().to_string(),
            hours_worked: day.hours_worked,
            breaks: day.breaks.len(),
            total_break_minutes: day.total_break_minutes,
            has_clock_out: day.has_clock_out,
        }
    }
}

/// Flatten a whole run, files in report order, days newest first.
pub fn flatten(report: &EmployeeReport) -> Vec<DayReportExport> {
    report
        .files
        .iter()
        .flat_map(|f| {
            f.days
                .iter()
                .map(move |d| DayReportExport::from_day(&report.employee, &f.file_name, d))
        })
        .collect()
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee",
        "file",
        "day",
        "first_event",
        "first_status",
        "last_event",
        "last_status",
        "hours_worked",
        "breaks",
        "total_break_minutes",
        "has_clock_out",
    ]
}

/// Row as strings, in header order (XLSX).
pub(crate) fn report_to_row(r: &DayReportExport) -> Vec<String> {
    vec![
        r.employee.clone(),
        r.file.clone(),
        r.day.clone(),
        r.first_event.clone(),
        r.first_status.clone(),
        r.last_event.clone(),
        r.last_status.clone(),
        r.hours_worked.map(|h| h.to_string()).unwrap_or_default(),
        r.breaks.to_string(),
        r.total_break_minutes.to_string(),
        r.has_clock_out.to_string(),
    ]
}
