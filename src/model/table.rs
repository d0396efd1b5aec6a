//! Table types.

use serde::{Deserialize, Serialize};

/// A table of plain-text cells.
///
/// The first row defines the column count. Tables produced by the builder
/// are rectangular; see [`Table::from_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table, first row is the header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a rectangular table from rows.
    ///
    /// Every row is fitted to the width of the first row: short rows are
    /// padded with empty cells, long rows are truncated.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, mut row)| {
                if row.len() != width {
                    log::debug!(
                        "Table row {} has {} cells, fitting to {} columns",
                        i,
                        row.len(),
                        width
                    );
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Get body rows (everything after the header).
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Get a single cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
