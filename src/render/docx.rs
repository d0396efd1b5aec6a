//! DOCX (word-processor) rendering for document models.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType, TableCell, TableRow};

use crate::error::{Error, Result};
use crate::model::{DocumentModel, Table};

use super::{render_with, BlockRenderer, RenderOptions};

const STYLE_TITLE: &str = "Heading1";
const STYLE_HEADING: &str = "Heading2";
const STYLE_LIST_BULLET: &str = "ListBullet";
const STYLE_LIST_NUMBER: &str = "ListNumber";

/// Convert a document to DOCX bytes.
pub fn to_docx(doc: &DocumentModel, options: &RenderOptions) -> Result<Vec<u8>> {
    render_with(doc, DocxRenderer::new(options.clone()))
}

enum BodyItem {
    Paragraph(Paragraph),
    Table(docx_rs::Table),
}

/// DOCX renderer.
///
/// Headings use `Heading1`/`Heading2` styles, list entries use
/// `ListBullet`/`ListNumber` and tables become grids with a bold header row.
pub struct DocxRenderer {
    options: RenderOptions,
    body: Vec<BodyItem>,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            body: Vec::new(),
        }
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(BodyItem::Paragraph(paragraph));
    }

    fn styles() -> Vec<Style> {
        vec![
            Style::new(STYLE_TITLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(36)
                .bold(),
            Style::new(STYLE_HEADING, StyleType::Paragraph)
                .name("Heading 2")
                .size(28)
                .bold(),
            Style::new(STYLE_LIST_BULLET, StyleType::Paragraph).name("List Bullet"),
            Style::new(STYLE_LIST_NUMBER, StyleType::Paragraph).name("List Number"),
        ]
    }
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn table_cell(text: &str, bold: bool) -> TableCell {
    let run = if bold {
        Run::new().add_text(text).bold()
    } else {
        Run::new().add_text(text)
    };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

impl BlockRenderer for DocxRenderer {
    type Output = Vec<u8>;

    fn heading(&mut self, level: u8, text: &str) {
        let style = if level == 1 { STYLE_TITLE } else { STYLE_HEADING };
        self.push_paragraph(text_paragraph(text).style(style));
    }

    fn paragraph(&mut self, text: &str) {
        self.push_paragraph(text_paragraph(text));
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.push_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()));
    }

    fn bullet_item(&mut self, text: &str) {
        let line = format!("{} {}", self.options.bullet_symbol, text);
        self.push_paragraph(text_paragraph(&line).style(STYLE_LIST_BULLET));
    }

    fn numbered_item(&mut self, text: &str) {
        self.push_paragraph(text_paragraph(text).style(STYLE_LIST_NUMBER));
    }

    fn table(&mut self, table: &Table) {
        if table.column_count() == 0 {
            return;
        }
        let rows = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| TableRow::new(row.iter().map(|cell| table_cell(cell, i == 0)).collect()))
            .collect();
        self.body.push(BodyItem::Table(docx_rs::Table::new(rows)));
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut docx = Docx::new();
        for style in Self::styles() {
            docx = docx.add_style(style);
        }
        for item in self.body {
            docx = match item {
                BodyItem::Paragraph(p) => docx.add_paragraph(p),
                BodyItem::Table(t) => docx.add_table(t),
            };
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| Error::Render(format!("DOCX packaging error: {}", e)))?;
        Ok(buffer.into_inner())
    }
}
