//! Single-pass Markdown to document model builder.

use rayon::prelude::*;

use super::{classify, split_row, BuildOptions, LineKind, StrayLinePolicy, TableAccumulator};
use crate::model::{DocumentBlock, DocumentModel};

/// Converts normalized Markdown into a [`DocumentModel`].
///
/// Building never fails. Lines that match no marker become paragraphs, and
/// pipe rows are collected until a blank line (or, by default, any other
/// non-table line) closes the table. A table still open at end of input is
/// flushed.
///
/// # Example
///
/// ```
/// use planmark::model::DocumentBlock;
/// use planmark::parser::DocumentBuilder;
///
/// let doc = DocumentBuilder::default().build("| A | B |\n|---|---|\n| 1 | 2 |");
/// assert!(matches!(&doc.blocks[0], DocumentBlock::Table(t) if t.row_count() == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    options: BuildOptions,
}

impl DocumentBuilder {
    /// Create a builder with the given options.
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a document model from Markdown.
    pub fn build(&self, markdown: &str) -> DocumentModel {
        let mut state = BuildState::new(&self.options);
        for line in markdown.lines() {
            state.feed(line);
        }
        state.finish()
    }
}

/// Build many independent documents, preserving input order.
pub fn build_many<S>(inputs: &[S], options: &BuildOptions) -> Vec<DocumentModel>
where
    S: AsRef<str> + Sync,
{
    let builder = DocumentBuilder::new(options.clone());
    if options.parallel {
        inputs
            .par_iter()
            .map(|input| builder.build(input.as_ref()))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| builder.build(input.as_ref()))
            .collect()
    }
}

/// Parsing state owned by one `build` call.
struct BuildState<'o> {
    options: &'o BuildOptions,
    blocks: Vec<DocumentBlock>,
    table: TableAccumulator,
}

impl<'o> BuildState<'o> {
    fn new(options: &'o BuildOptions) -> Self {
        Self {
            options,
            blocks: Vec::new(),
            table: TableAccumulator::new(),
        }
    }

    fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        let kind = classify(line);

        if self.options.stray_lines == StrayLinePolicy::CloseTable && !kind.is_table_line() {
            self.close_table();
        }

        match kind {
            LineKind::Blank => self.close_table(),
            LineKind::Title(text) => {
                if self.options.recognize_title {
                    self.push(DocumentBlock::heading(1, text));
                } else {
                    self.push_text(line);
                }
            }
            LineKind::Heading(text) => self.push(DocumentBlock::heading(2, text)),
            LineKind::Bullet(text) => self.push(DocumentBlock::bullet(text)),
            LineKind::Numbered(text) => self.push(DocumentBlock::numbered(text)),
            LineKind::TableSeparator => {}
            LineKind::TableRow(text) => self.table.push_row(split_row(text)),
            LineKind::Bold(text) => self.push(DocumentBlock::bold(text)),
            LineKind::Text(text) => self.push_text(text),
        }
    }

    fn push(&mut self, block: DocumentBlock) {
        self.blocks.push(block);
    }

    fn push_text(&mut self, text: &str) {
        if self.table.is_open() {
            log::trace!("Dropping line inside table: {:?}", text);
            return;
        }
        self.push(DocumentBlock::paragraph(text));
    }

    fn close_table(&mut self) {
        if let Some(table) = self.table.close() {
            self.blocks.push(DocumentBlock::Table(table));
        }
    }

    fn finish(mut self) -> DocumentModel {
        self.close_table();
        DocumentModel::from_blocks(self.blocks)
    }
}
