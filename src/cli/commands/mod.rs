pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// `--name` if given, otherwise the configured default employee.
pub(crate) fn resolve_employee(name: &Option<String>, cfg: &Config) -> AppResult<String> {
    let name = name
        .as_deref()
        .unwrap_or(&cfg.default_employee)
        .trim()
        .to_string();

    if name.is_empty() {
        return Err(AppError::NoEmployee);
    }
    Ok(name)
}
