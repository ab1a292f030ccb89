//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Column {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Column {
            header: header.to_string(),
            width,
            align: Align::Right,
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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Pad `s` to `width` display cells, wide characters counted properly.
    fn pad(s: &str, width: usize, align: Align) -> String {
        let used = UnicodeWidthStr::width(s);
        let fill = width.saturating_sub(used);
        match align {
            Align::Left => format!("{}{}", s, " ".repeat(fill)),
            Align::Right => format!("{}{}", " ".repeat(fill), s),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad(&col.header, col.width, col.align));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::pad(cell, col.width, col.align));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    /// Separator line as wide as the full table, e.g. `----------`.
    pub fn separator(&self, ch: &str) -> String {
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        ch.repeat(total.saturating_sub(1))
    }
}
