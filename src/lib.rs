//! # planmark
//!
//! Markdown normalization and document-model building for generated
//! business-plan reports.
//!
//! A report arrives as named sections of loosely formatted Markdown. The
//! normalizer assembles them into one document with a title and a company
//! heading; the builder reads that Markdown line by line into a flat list of
//! typed blocks that renderers turn into Markdown, plain text, JSON or DOCX.
//!
//! ## Quick Start
//!
//! ```
//! use planmark::{normalize_sections, build, Sections};
//!
//! fn main() -> planmark::Result<()> {
//!     let sections: Sections = [
//!         ("Résumé", "Le nom de l'entreprise est Solaris. Elle vend du soleil."),
//!         ("Marché", "* Particuliers\n* Collectivités"),
//!     ]
//!     .into_iter()
//!     .collect();
//!
//!     let markdown = normalize_sections(&sections);
//!     let doc = build(&markdown);
//!     assert_eq!(doc.headings()[1], (2, "Entreprise: Solaris"));
//!
//!     println!("{}", planmark::render::to_text(&doc, &Default::default())?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Normalization**: bullet canonicalization, company-name extraction
//! - **Structure**: headings, paragraphs, bold paragraphs, lists, pipe tables
//! - **Multiple output formats**: Markdown, plain text, JSON, DOCX
//! - **Parallel processing**: Uses Rayon for batches of documents

pub mod convert;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, OutputFormat};
pub use error::{Error, Result};
pub use model::{DocumentBlock, DocumentModel, Metadata, Section, Sections, Table};
pub use normalize::{NormalizeOptions, NormalizedReport, Normalizer, COMPANY_NAME_PLACEHOLDER};
pub use parser::{BuildOptions, DocumentBuilder, StrayLinePolicy};
pub use render::{ConversionStats, JsonFormat, RenderOptions};

use std::path::Path;

/// Normalize sections under the given company name.
///
/// # Example
///
/// ```
/// use planmark::{normalize, Sections};
///
/// let sections: Sections = [("Intro", "* a")].into_iter().collect();
/// let markdown = normalize(&sections, "Solaris");
/// assert!(markdown.starts_with("# Business Plan\n\n## Entreprise: Solaris\n\n## Intro\n\n- a\n"));
/// ```
pub fn normalize(sections: &Sections, company_name: &str) -> String {
    Normalizer::default().normalize(sections, company_name)
}

/// Normalize sections, taking the company name from the first section.
pub fn normalize_sections(sections: &Sections) -> String {
    Normalizer::default().normalize_sections(sections)
}

/// Build a document model from Markdown with default options.
///
/// # Example
///
/// ```
/// use planmark::{build, DocumentBlock};
///
/// let doc = build("## Intro\n- one\n**Key**");
/// assert_eq!(doc.blocks[1], DocumentBlock::bullet("one"));
/// assert_eq!(doc.blocks[2], DocumentBlock::bold("Key"));
/// ```
pub fn build(markdown: &str) -> DocumentModel {
    DocumentBuilder::default().build(markdown)
}

/// Build a document model from Markdown with custom options.
pub fn build_with_options(markdown: &str, options: BuildOptions) -> DocumentModel {
    DocumentBuilder::new(options).build(markdown)
}

/// Rebuild Markdown through the document model.
///
/// The output has canonical spacing: one blank line between blocks and
/// tables with a generated separator row.
pub fn to_markdown(markdown: &str) -> Result<String> {
    let doc = build(markdown);
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Parse sections from JSON text.
///
/// Accepts an object mapping section names to content (key order is kept)
/// or an array of `{"name": ..., "content": ...}` objects.
pub fn sections_from_json(json: &str) -> Result<Sections> {
    Ok(serde_json::from_str(json)?)
}

/// Read sections from a JSON file.
///
/// # Example
///
/// ```no_run
/// use planmark::read_sections;
///
/// let sections = read_sections("report.json").unwrap();
/// println!("{} sections", sections.len());
/// ```
pub fn read_sections<P: AsRef<Path>>(path: P) -> Result<Sections> {
    let data = std::fs::read_to_string(path)?;
    sections_from_json(&data)
}

/// Builder for normalizing and converting reports.
///
/// # Example
///
/// ```
/// use planmark::{Planmark, Sections};
///
/// let sections: Sections = [("Intro", "La vision de Solaris est claire")].into_iter().collect();
/// let text = Planmark::new()
///     .with_title("Plan d'affaires")
///     .with_frontmatter()
///     .parse_sections(&sections)
///     .to_markdown()?;
/// assert!(text.contains("# Plan d'affaires"));
/// # Ok::<(), planmark::Error>(())
/// ```
pub struct Planmark {
    normalize_options: NormalizeOptions,
    build_options: BuildOptions,
    render_options: RenderOptions,
}

impl Planmark {
    /// Create a new Planmark builder.
    pub fn new() -> Self {
        Self {
            normalize_options: NormalizeOptions::default(),
            build_options: BuildOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Use the line handling of earlier releases: stray lines in
    /// a table are dropped and `# ` lines become paragraphs.
    pub fn compat(mut self) -> Self {
        self.build_options = BuildOptions::compat();
        self
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.normalize_options = self.normalize_options.with_title(title);
        self
    }

    /// Set the company heading label.
    pub fn with_company_label(mut self, label: impl Into<String>) -> Self {
        self.normalize_options = self.normalize_options.with_company_label(label);
        self
    }

    /// Set the text used when no company name is found.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.normalize_options = self.normalize_options.with_placeholder(placeholder);
        self
    }

    /// Set how stray lines inside a table are handled.
    pub fn with_stray_lines(mut self, policy: StrayLinePolicy) -> Self {
        self.build_options = self.build_options.with_stray_lines(policy);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set custom render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Normalize and build a report from sections.
    ///
    /// The document metadata carries the title and the resolved company
    /// name as author.
    pub fn parse_sections(self, sections: &Sections) -> PlanmarkResult {
        let report = Normalizer::new(self.normalize_options).normalize_report(sections);
        let document = report.build(&self.build_options);

        PlanmarkResult {
            markdown: report.markdown,
            document,
            render_options: self.render_options,
        }
    }

    /// Build a document from already normalized Markdown.
    pub fn parse_markdown(self, markdown: &str) -> PlanmarkResult {
        let document = DocumentBuilder::new(self.build_options).build(markdown);
        PlanmarkResult {
            markdown: markdown.to_string(),
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Planmark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of building a report.
pub struct PlanmarkResult {
    /// The normalized Markdown the document was built from
    pub markdown: String,
    /// The built document
    pub document: DocumentModel,
    render_options: RenderOptions,
}

impl PlanmarkResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to DOCX bytes.
    #[cfg(feature = "docx")]
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.render_options)
    }

    /// Collect block statistics.
    pub fn stats(&self) -> ConversionStats {
        ConversionStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentModel {
        &self.document
    }
}
