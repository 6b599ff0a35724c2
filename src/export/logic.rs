// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::export::xlsx::export_xlsx;
use crate::models::EmployeeReport;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei day report di un dipendente.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output (`~` ammesso)
    /// - `force`: sovrascrive senza chiedere conferma
    ///
    /// Returns the number of exported rows.
    pub fn export(
        report: &EmployeeReport,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;

        let rows = flatten(report);

        if rows.is_empty() {
            warning(format!("No day reports found for {}.", report.employee));
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), format = format.as_str(), "export written");
        Ok(rows.len())
    }
}
