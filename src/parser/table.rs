//! Pipe table accumulation.

use crate::model::Table;

/// Check if a pipe line is a header/body separator such as `|---|:--:|`.
///
/// The line may contain only pipes, dashes, colons and whitespace, and must
/// contain at least one dash or colon; `| |` is an empty data row, not a
/// separator.
pub fn is_separator_row(line: &str) -> bool {
    line.contains(['-', ':'])
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a pipe row into trimmed cells.
///
/// One outer pipe is removed on each side when present, so a row missing
/// its closing pipe keeps its last cell.
pub fn split_row(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Rows collected for the table currently being read.
#[derive(Debug, Clone, Default)]
pub struct TableAccumulator {
    rows: Vec<Vec<String>>,
}

impl TableAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Check if rows are pending, i.e. a table is being read.
    pub fn is_open(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Get the number of pending rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows are pending.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Materialize the pending rows as a table and reset.
    ///
    /// Returns `None` when nothing is pending.
    pub fn close(&mut self) -> Option<Table> {
        if self.rows.is_empty() {
            return None;
        }
        let rows = std::mem::take(&mut self.rows);
        log::trace!("Closing table with {} rows", rows.len());
        Some(Table::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rows() {
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :--- | ---: |"));
        assert!(is_separator_row("|-"));
        assert!(is_separator_row("| : | : |"));
        assert!(is_separator_row("|:|"));
        assert!(!is_separator_row("| | |"));
        assert!(!is_separator_row("| - | x |"));
        assert!(!is_separator_row("| 1 | 2 |"));
    }

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("| A | B |"), vec!["A", "B"]);
        assert_eq!(split_row("|A|B"), vec!["A", "B"]);
        assert_eq!(split_row("| A |  | C |"), vec!["A", "", "C"]);
        assert_eq!(split_row("| |"), vec![""]);
    }

    #[test]
    fn test_accumulator_close() {
        let mut acc = TableAccumulator::new();
        assert!(acc.close().is_none());

        acc.push_row(split_row("| A | B |"));
        acc.push_row(split_row("| 1 |"));
        assert!(acc.is_open());
        assert_eq!(acc.len(), 2);

        let table = acc.close().unwrap();
        assert_eq!(table.rows, vec![vec!["A", "B"], vec!["1", ""]]);
        assert!(!acc.is_open());
        assert!(acc.close().is_none());
    }
}
