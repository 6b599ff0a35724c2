//! Event source: locate the current export files and turn their rows into
//! attendance events for one employee.

pub mod date_time;
pub mod folders;
pub mod reader;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceEvent;
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

pub struct EventSource<'a> {
    cfg: &'a Config,
}

impl<'a> EventSource<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Export files to report on, newest first. `month` defaults to the
    /// current month.
    pub fn select_files(&self, month: Option<u32>) -> AppResult<Vec<PathBuf>> {
        let month = match month {
            Some(m) if (1..=12).contains(&m) => m,
            Some(m) => return Err(AppError::InvalidMonth(m)),
            None => Local::now().month(),
        };

        let root = self.cfg.export_root_path();
        let folder = folders::select_month_folder(&root, month)?;
        tracing::debug!(folder = %folder.display(), month, "month folder selected");

        folders::select_export_files(
            &folder,
            &self.cfg.export_extension,
            self.cfg.files_per_report,
        )
    }

    pub fn read_events(&self, file: &Path, employee: &str) -> AppResult<Vec<AttendanceEvent>> {
        reader::read_events(file, employee)
    }
}
