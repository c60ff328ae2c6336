//! # Grid Rendering
//!
//! [`render_grid`] turns a title, a column list and a dataset into a [`Grid`]
//! of display strings. The TUI converts a grid into a `ratatui` table; the
//! headless `--dump-users` mode prints [`Grid::to_plain_text`].

use crate::grid::record::Record;
use unicode_width::UnicodeWidthStr;

/// A rendered table: title, header row and body rows of display strings.
///
/// Every body row has exactly `header.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render `data` under `columns`.
///
/// Produces one header cell per column and one body row per record, both in
/// input order. A record without a requested field gets an empty cell.
/// Neither input is modified.
pub fn render_grid<S: AsRef<str>>(title: &str, columns: &[S], data: &[Record]) -> Grid {
    let header = columns.iter().map(|c| c.as_ref().to_string()).collect();
    let rows = data
        .iter()
        .map(|record| columns.iter().map(|c| record.cell(c.as_ref())).collect())
        .collect();

    Grid {
        title: title.to_string(),
        header,
        rows,
    }
}

impl Grid {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest header or cell text per column, in terminal columns.
    pub fn column_widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(i, head)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(head.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Bordered plain-text rendering.
    ///
    /// ```text
    /// Users
    /// +----+------+
    /// | id | name |
    /// +----+------+
    /// | 1  | a    |
    /// | 2  |      |
    /// +----+------+
    /// ```
    pub fn to_plain_text(&self) -> String {
        let widths = self.column_widths();

        let separator = {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&"-".repeat(width + 2));
                line.push('+');
            }
            line
        };

        let format_row = |cells: &[String]| {
            let mut line = String::from("|");
            for (cell, width) in cells.iter().zip(&widths) {
                let pad = width.saturating_sub(cell.width());
                line.push(' ');
                line.push_str(cell);
                line.push_str(&" ".repeat(pad + 1));
                line.push('|');
            }
            line
        };

        let mut lines = vec![self.title.clone(), separator.clone()];
        lines.push(format_row(&self.header));
        lines.push(separator.clone());
        for row in &self.rows {
            lines.push(format_row(row));
        }
        if !self.rows.is_empty() {
            lines.push(separator);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
