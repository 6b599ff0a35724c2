//! Unified application error type.
//! All modules (source, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Export source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export root not found: {0}")]
    ExportRootMissing(PathBuf),

    #[error("No month folder found under {0}")]
    NoMonthFolder(PathBuf),

    #[error("No export files found in {0}")]
    NoExportFiles(PathBuf),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("No employee name given and no default_employee configured")]
    NoEmployee,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Output file path must be absolute: {0}")]
    RelativeOutputPath(String),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,
}

pub type AppResult<T> = Result<T, AppError>;
