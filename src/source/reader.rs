// src/source/reader.rs

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceEvent, EventStatus};
use crate::source::date_time::parse_date_time;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// Columns required in every export.
const REQUIRED_COLUMNS: [&str; 3] = ["Name", "Date/Time", "Status"];

/// Column name → field map of an export row.
#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Date/Time")]
    date_time: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Location ID", default)]
    location: String,
    #[serde(rename = "VerifyCode", default)]
    verify_code: String,
}

impl ExportRow {
    fn into_event(self) -> Option<AttendanceEvent> {
        let timestamp = parse_date_time(&self.date_time)?;
        Some(AttendanceEvent {
            name: self.name.trim().to_string(),
            timestamp,
            status: EventStatus::from_export_str(&self.status),
            location: self.location.trim().to_string(),
            verify_code: self.verify_code.trim().to_string(),
        })
    }
}

/// Read the events of `employee` from an export file.
pub fn read_events(path: &Path, employee: &str) -> AppResult<Vec<AttendanceEvent>> {
    let file = File::open(path)?;
    read_events_from(file, &path.display().to_string(), employee)
}

/// Read the events of `employee` from any CSV stream; `label` names the
/// source in errors and logs.
pub fn read_events_from<R: io::Read>(
    rdr: R,
    label: &str,
    employee: &str,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn {
                file: label.to_string(),
                column: column.to_string(),
            });
        }
    }

    let employee = employee.trim();
    let mut events = Vec::new();

    for (line, result) in reader.deserialize::<ExportRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(file = label, row = line + 2, error = %e, "unreadable row skipped");
                continue;
            }
        };

        if row.name.trim() != employee {
            continue;
        }

        let raw = row.date_time.clone();
        match row.into_event() {
            Some(ev) => events.push(ev),
            None => {
                tracing::warn!(file = label, row = line + 2, value = %raw, "invalid Date/Time, row skipped");
            }
        }
    }

    tracing::debug!(file = label, employee, count = events.len(), "events read");
    Ok(events)
}
