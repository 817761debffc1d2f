// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::RecordExport;
use crate::export::excel_date::{DATETIME_FORMAT, to_excel_serial};
use crate::export::model::{get_headers, record_to_row};
use crate::utils::time::parse_db_timestamp;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Render the records to an in-memory XLSX workbook: styled header,
/// frozen first row, banded rows and fitted column widths.
pub(crate) fn render_xlsx(records: &[RecordExport]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Kesimler").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        write_row(worksheet, row, rec, band)?;

        for (col, text) in record_to_row(rec).iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(text.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// id and length as numbers, created_at as an Excel date-time when it
/// parses, buffer type as text.
fn write_row(ws: &mut Worksheet, row: u32, rec: &RecordExport, bg: Color) -> AppResult<()> {
    let id_fmt = cell_format(bg).set_align(FormatAlign::Right);
    ws.write_with_format(row, 0, rec.id as f64, &id_fmt)
        .map_err(to_export_error)?;

    let len_fmt = cell_format(bg)
        .set_align(FormatAlign::Right)
        .set_num_format("0.00");
    ws.write_with_format(row, 1, rec.length, &len_fmt)
        .map_err(to_export_error)?;

    ws.write_with_format(row, 2, rec.buffer_type.as_str(), &cell_format(bg))
        .map_err(to_export_error)?;

    match parse_db_timestamp(&rec.created_at) {
        Some(dt) => {
            let dt_fmt = cell_format(bg).set_num_format(DATETIME_FORMAT);
            ws.write_with_format(row, 3, to_excel_serial(dt), &dt_fmt)
                .map_err(to_export_error)?;
        }
        None => {
            ws.write_with_format(row, 3, rec.created_at.as_str(), &cell_format(bg))
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
