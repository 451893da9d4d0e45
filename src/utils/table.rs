//! Table rendering utilities for CLI outputs.
//!
//! Cells may contain embedded line breaks (the memo column is chunked every
//! 10 characters); a row is rendered over as many terminal lines as its
//! tallest cell.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell_lines(cell: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = cell.split('\n').collect();
        while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                for line in Self::cell_lines(cell) {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(line));
                }
            }
        }
        widths
    }

    pub fn render(&self, separator_char: &str) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        // Separator line
        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&separator_char.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<&str>> = row.iter().map(|c| Self::cell_lines(c)).collect();
            let height = cells.iter().map(|c| c.len()).max().unwrap_or(1);

            for line_idx in 0..height {
                for (i, w) in widths.iter().enumerate() {
                    let line = cells[i].get(line_idx).copied().unwrap_or("");
                    out.push_str(&pad_right(line, *w));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
