// src/export/model.rs

use crate::core::length::{format_length, round2};
use crate::models::Record;
use crate::utils::time::to_db_timestamp;
use serde::Serialize;

/// Flat snapshot of one record for the exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: i64,
    pub length: f64,
    pub buffer_type: String,
    pub created_at: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            id: r.id,
            length: round2(r.length),
            buffer_type: r.buffer_type.clone(),
            created_at: to_db_timestamp(r.created_at),
        }
    }
}

/// Column headers shared by XLSX and PDF.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "length", "buffer_type", "created_at"]
}

/// String row for the PDF table; length always has two decimals.
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        format_length(r.length),
        r.buffer_type.clone(),
        r.created_at.clone(),
    ]
}

pub(crate) fn records_to_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
