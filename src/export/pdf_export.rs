// src/export/pdf_export.rs

use crate::export::RecordExport;
use crate::export::model::{get_headers, records_to_table};
use crate::export::pdf::PdfManager;

/// Render the records as a landscape, gridded table with a shaded header.
pub(crate) fn render_pdf(records: &[RecordExport], title: &str) -> Vec<u8> {
    let headers = get_headers();
    let data = records_to_table(records);

    let mut pdf = PdfManager::landscape();
    pdf.write_table(title, &headers, &data);
    pdf.finish()
}
