//! Plain text rendering for document models.

use crate::error::Result;
use crate::model::{DocumentModel, Table};

use super::{render_with, BlockRenderer, RenderOptions};

/// Convert a document to plain text.
pub fn to_text(doc: &DocumentModel, options: &RenderOptions) -> Result<String> {
    render_with(doc, TextRenderer::new(options.clone()))
}

/// Plain text renderer.
///
/// Emphasis is dropped, bullets get the configured symbol and table cells
/// are tab-separated.
pub struct TextRenderer {
    options: RenderOptions,
    output: String,
    in_list: bool,
}

impl TextRenderer {
    /// Create a new plain text renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            output: String::new(),
            in_list: false,
        }
    }

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
}

impl BlockRenderer for TextRenderer {
    type Output = String;

    fn heading(&mut self, level: u8, text: &str) {
        if !self.options.underline_headings {
            self.push_block(text);
            return;
        }
        let rule = if level == 1 { '=' } else { '-' };
        let underline: String = std::iter::repeat(rule).take(text.chars().count()).collect();
        self.push_block(&format!("{}\n{}", text, underline));
    }

    fn paragraph(&mut self, text: &str) {
        self.push_block(text);
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.push_block(text);
    }

    fn bullet_item(&mut self, text: &str) {
        let line = format!("{} {}", self.options.bullet_symbol, text);
        self.push_item(&line);
    }

    fn numbered_item(&mut self, text: &str) {
        self.push_item(text);
    }

    fn table(&mut self, table: &Table) {
        if table.is_empty() {
            return;
        }
        self.push_block(&table.plain_text());
    }

    fn finish(self) -> Result<String> {
        Ok(self.output.trim().to_string())
    }
}
