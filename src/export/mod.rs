// src/export/mod.rs

mod excel_date;
mod fs_utils;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use logic::{ExportLogic, ExportOutcome};
pub use model::RecordExport;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File extension proposed by the save prompt.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
        }
    }
}
