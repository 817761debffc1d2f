// src/export/logic.rs

use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, write_atomic};
use crate::export::model::RecordExport;
use crate::export::pdf_export::render_pdf;
use crate::export::xlsx::render_xlsx;
use chrono::Local;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// The store is empty; no file was touched.
    NothingToExport,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// All records, oldest first, flattened for the writers.
    pub fn snapshot<S: RecordStore + ?Sized>(store: &S) -> AppResult<Vec<RecordExport>> {
        Ok(store.list()?.iter().map(RecordExport::from).collect())
    }

    /// Full export: snapshot, bail out when empty, confirm overwrite
    /// (unless `force`), then write.
    pub fn export<S: RecordStore + ?Sized>(
        store: &S,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<ExportOutcome> {
        let rows = Self::snapshot(store)?;
        if rows.is_empty() {
            return Ok(ExportOutcome::NothingToExport);
        }

        ensure_writable(path, force)?;
        Self::write(format, &rows, path)
    }

    /// Render and atomically write an already taken snapshot.
    pub fn write(format: ExportFormat, rows: &[RecordExport], path: &Path) -> AppResult<ExportOutcome> {
        if rows.is_empty() {
            return Ok(ExportOutcome::NothingToExport);
        }

        let bytes = match format {
            ExportFormat::Xlsx => render_xlsx(rows)?,
            ExportFormat::Pdf => render_pdf(rows, &build_pdf_title(rows.len())),
        };

        write_atomic(path, &bytes)?;

        Ok(ExportOutcome::Written {
            path: path.to_path_buf(),
            rows: rows.len(),
        })
    }
}

fn build_pdf_title(count: usize) -> String {
    format!(
        "Kesim Kayitlari - {} ({} records)",
        Local::now().format("%Y-%m-%d %H:%M"),
        count
    )
}
