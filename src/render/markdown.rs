//! Markdown rendering for document models.

use crate::error::Result;
use crate::model::{DocumentModel, Metadata, Table};

use super::{render_with, BlockRenderer, ConversionStats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &DocumentModel, options: &RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &DocumentModel, options: &RenderOptions) -> Result<RenderResult> {
    let content = to_markdown(doc, options)?;
    let stats = ConversionStats::from_document(doc);
    Ok(RenderResult::new(content, doc.metadata.clone(), stats))
}

/// Markdown renderer.
///
/// With the default `-` list marker and no frontmatter, output uses the
/// same surface the builder reads, so rendering a model and building it
/// again yields the same blocks. The builder only reads `- ` as a bullet;
/// any other marker rebuilds as paragraphs.
pub struct MarkdownRenderer {
    options: RenderOptions,
    output: String,
    in_list: bool,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            output: String::new(),
            in_list: false,
        }
    }

    /// Render a document to Markdown.
    pub fn render(self, doc: &DocumentModel) -> Result<String> {
        render_with(doc, self)
    }

    /// Close a running list before a non-list block.
    fn end_list(&mut self) {
        if self.in_list {
            self.output.push('\n');
            self.in_list = false;
        }
    }

    fn push_block(&mut self, text: &str) {
        self.end_list();
        self.output.push_str(text);
        self.output.push_str("\n\n");
    }

    fn push_item(&mut self, text: &str) {
        self.in_list = true;
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn push_row(&mut self, cells: &[String]) {
        self.output.push('|');
        for cell in cells {
            self.output.push_str(&format!(" {} |", cell.replace('\n', " ")));
        }
        self.output.push('\n');
    }
}

impl BlockRenderer for MarkdownRenderer {
    type Output = String;

    fn begin(&mut self, metadata: &Metadata) {
        if self.options.include_frontmatter && !metadata.is_empty() {
            self.output.push_str(&metadata.to_yaml_frontmatter());
            self.output.push('\n');
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        let prefix = "#".repeat(level as usize);
        self.push_block(&format!("{} {}", prefix, text));
    }

    fn paragraph(&mut self, text: &str) {
        self.push_block(text);
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.push_block(&format!("**{}**", text));
    }

    fn bullet_item(&mut self, text: &str) {
        let line = format!("{} {}", self.options.list_marker, text);
        self.push_item(&line);
    }

    fn numbered_item(&mut self, text: &str) {
        self.push_item(text);
    }

    fn table(&mut self, table: &Table) {
        if table.column_count() == 0 {
            return;
        }
        self.end_list();

        for (i, row) in table.rows.iter().enumerate() {
            self.push_row(row);
            if i == 0 {
                self.output.push('|');
                for _ in row {
                    self.output.push_str(" --- |");
                }
                self.output.push('\n');
            }
        }
        self.output.push('\n');
    }

    fn finish(self) -> Result<String> {
        Ok(self.output.trim().to_string())
    }
}
