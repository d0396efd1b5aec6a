//! The renderer boundary.
//!
//! Every output format implements [`BlockRenderer`]. The trait has one
//! required method per [`DocumentBlock`] variant and [`render_block`]
//! matches exhaustively, so adding a block kind fails to compile until
//! every renderer handles it.
//!
//! # Example
//!
//! ```
//! use planmark::model::{DocumentModel, Table};
//! use planmark::render::{render_with, BlockRenderer};
//!
//! /// Collects heading texts.
//! struct Outline(Vec<String>);
//!
//! impl BlockRenderer for Outline {
//!     type Output = Vec<String>;
//!
//!     fn heading(&mut self, _level: u8, text: &str) {
//!         self.0.push(text.to_string());
//!     }
//!     fn paragraph(&mut self, _text: &str) {}
//!     fn bold_paragraph(&mut self, _text: &str) {}
//!     fn bullet_item(&mut self, _text: &str) {}
//!     fn numbered_item(&mut self, _text: &str) {}
//!     fn table(&mut self, _table: &Table) {}
//!
//!     fn finish(self) -> planmark::Result<Vec<String>> {
//!         Ok(self.0)
//!     }
//! }
//!
//! let doc = planmark::build("## Intro\ntext\n## Details");
//! let outline = render_with(&doc, Outline(Vec::new())).unwrap();
//! assert_eq!(outline, vec!["Intro", "Details"]);
//! ```

use crate::error::Result;
use crate::model::{DocumentBlock, DocumentModel, Metadata, Table};

/// A consumer of document blocks producing some output.
pub trait BlockRenderer {
    /// The rendered artifact.
    type Output;

    /// Called once before the first block.
    fn begin(&mut self, metadata: &Metadata) {
        let _ = metadata;
    }

    /// Render a heading at the given level.
    fn heading(&mut self, level: u8, text: &str);

    /// Render plain body text.
    fn paragraph(&mut self, text: &str);

    /// Render text with emphasis.
    fn bold_paragraph(&mut self, text: &str);

    /// Render a bullet list entry.
    fn bullet_item(&mut self, text: &str);

    /// Render a numbered list entry; `text` carries its own number.
    fn numbered_item(&mut self, text: &str);

    /// Render a table, preserving row and column order.
    fn table(&mut self, table: &Table);

    /// Produce the output after the last block.
    fn finish(self) -> Result<Self::Output>;
}

/// Dispatch one block to the matching renderer method.
pub fn render_block<R: BlockRenderer + ?Sized>(renderer: &mut R, block: &DocumentBlock) {
    match block {
        DocumentBlock::Heading { level, text } => renderer.heading(*level, text),
        DocumentBlock::Paragraph { text } => renderer.paragraph(text),
        DocumentBlock::BoldParagraph { text } => renderer.bold_paragraph(text),
        DocumentBlock::BulletItem { text } => renderer.bullet_item(text),
        DocumentBlock::NumberedItem { text } => renderer.numbered_item(text),
        DocumentBlock::Table(table) => renderer.table(table),
    }
}

/// Feed a whole document through a renderer.
pub fn render_with<R: BlockRenderer>(doc: &DocumentModel, mut renderer: R) -> Result<R::Output> {
    renderer.begin(&doc.metadata);
    for block in &doc.blocks {
        render_block(&mut renderer, block);
    }
    renderer.finish()
}
