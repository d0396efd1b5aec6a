//! Block-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A single unit of document content.
///
/// Renderers must handle every variant; see [`crate::render::BlockRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentBlock {
    /// A heading. Level 1 is reserved for the report title.
    Heading {
        /// Heading level (1 or 2)
        level: u8,
        /// Heading text without the `#` marker
        text: String,
    },

    /// Plain body text.
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A whole line rendered with emphasis.
    BoldParagraph {
        /// Text with the surrounding `**` removed
        text: String,
    },

    /// One bullet list entry.
    BulletItem {
        /// Item text without the `- ` marker
        text: String,
    },

    /// One numbered list entry.
    NumberedItem {
        /// The full source line, number token included
        text: String,
    },

    /// A fully materialized table.
    Table(Table),
}

impl DocumentBlock {
    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        DocumentBlock::Heading {
            level: level.clamp(1, 2),
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        DocumentBlock::Paragraph { text: text.into() }
    }

    /// Create a bold paragraph block.
    pub fn bold(text: impl Into<String>) -> Self {
        DocumentBlock::BoldParagraph { text: text.into() }
    }

    /// Create a bullet item block.
    pub fn bullet(text: impl Into<String>) -> Self {
        DocumentBlock::BulletItem { text: text.into() }
    }

    /// Create a numbered item block.
    pub fn numbered(text: impl Into<String>) -> Self {
        DocumentBlock::NumberedItem { text: text.into() }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, DocumentBlock::Heading { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, DocumentBlock::Table(_))
    }

    /// Check if this block is a bullet or numbered list entry.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            DocumentBlock::BulletItem { .. } | DocumentBlock::NumberedItem { .. }
        )
    }

    /// Get the plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            DocumentBlock::Heading { text, .. }
            | DocumentBlock::Paragraph { text }
            | DocumentBlock::BoldParagraph { text }
            | DocumentBlock::BulletItem { text }
            | DocumentBlock::NumberedItem { text } => text.clone(),
            DocumentBlock::Table(table) => table.plain_text(),
        }
    }
}
