use serde::Serialize;

use super::day_report::DayReport;

/// Day reports of one export file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileReport {
    pub file_name: String,
    pub days: Vec<DayReport>,
}

/// Everything produced for one employee in a single run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeReport {
    pub employee: String,
    pub files: Vec<FileReport>,
}

impl EmployeeReport {
    pub fn day_count(&self) -> usize {
        self.files.iter().map(|f| f.days.len()).sum()
    }
}
