// src/export/logic.rs

use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::store::records::RecordStore;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the full record history.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every record to `file` in `format`. Returns the exported row count.
    pub fn export(
        store: &RecordStore,
        audit_db: &Path,
        format: &ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if file.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                file.display()
            )));
        }

        ensure_writable(file, force)?;

        let rows: Vec<RecordExport> = store.load().iter().map(RecordExport::from).collect();

        if rows.is_empty() {
            warning("No records to export yet.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Xlsx => export_xlsx(&rows, file)?,
        }

        audit(
            audit_db,
            "export",
            &file.to_string_lossy(),
            &format!("{} records exported as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
