//! Rendering result with metadata and statistics.

use crate::error::Result;
use crate::model::{DocumentModel, Metadata, Table};
use serde::{Deserialize, Serialize};

use super::{render_block, BlockRenderer};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document metadata (copied from the model)
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Block counts and text size of a document model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Number of bold paragraphs
    pub bold_paragraph_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of numbered items
    pub numbered_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Total rows across all tables
    pub table_row_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn from_document(doc: &DocumentModel) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            render_block(&mut stats, block);
        }
        stats
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.bold_paragraph_count
            + self.bullet_count
            + self.numbered_count
            + self.table_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.bold_paragraph_count += other.bold_paragraph_count;
        self.bullet_count += other.bullet_count;
        self.numbered_count += other.numbered_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

impl BlockRenderer for ConversionStats {
    type Output = ConversionStats;

    fn heading(&mut self, _level: u8, text: &str) {
        self.heading_count += 1;
        self.count_text(text);
    }

    fn paragraph(&mut self, text: &str) {
        self.paragraph_count += 1;
        self.count_text(text);
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.bold_paragraph_count += 1;
        self.count_text(text);
    }

    fn bullet_item(&mut self, text: &str) {
        self.bullet_count += 1;
        self.count_text(text);
    }

    fn numbered_item(&mut self, text: &str) {
        self.numbered_count += 1;
        self.count_text(text);
    }

    fn table(&mut self, table: &Table) {
        self.table_count += 1;
        self.table_row_count += table.row_count() as u32;
        for cell in table.rows.iter().flatten() {
            self.count_text(cell);
        }
    }

    fn finish(self) -> Result<ConversionStats> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentBlock;

    #[test]
    fn test_count_text() {
        let mut stats = ConversionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_document() {
        let doc = DocumentModel::from_blocks(vec![
            DocumentBlock::heading(2, "Intro"),
            DocumentBlock::paragraph("two words"),
            DocumentBlock::bullet("x"),
            DocumentBlock::bullet("y"),
            DocumentBlock::Table(Table::from_rows(vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ])),
        ]);

        let stats = ConversionStats::from_document(&doc);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.bullet_count, 2);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
        assert_eq!(stats.block_count(), 5);
        assert_eq!(stats.word_count, 1 + 2 + 1 + 1 + 4);
    }

    #[test]
    fn test_merge() {
        let mut a = ConversionStats {
            paragraph_count: 5,
            table_count: 2,
            ..Default::default()
        };
        let b = ConversionStats {
            paragraph_count: 3,
            bullet_count: 4,
            ..Default::default()
        };

        a.merge(&b);
        assert_eq!(a.paragraph_count, 8);
        assert_eq!(a.table_count, 2);
        assert_eq!(a.bullet_count, 4);
    }
}
