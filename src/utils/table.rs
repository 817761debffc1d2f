//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, widening columns as needed.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    fn pad(s: &str, width: usize) -> String {
        let w = UnicodeWidthStr::width(s);
        format!("{s}{}", " ".repeat(width.saturating_sub(w)))
    }

    fn line(&self, cells: &[String]) -> String {
        self.columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| Self::pad(cell, col.width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    pub fn header_line(&self) -> String {
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.line(&headers)
    }

    /// One plain (uncoloured) line per row, aligned to the header.
    pub fn row_lines(&self) -> Vec<String> {
        self.rows.iter().map(|r| self.line(r)).collect()
    }
}
