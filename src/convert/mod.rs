//! End-to-end conversion: sections or Markdown in, rendered bytes out.
//!
//! # Example
//!
//! ```
//! use planmark::convert::{convert_sections, ConvertOptions, OutputFormat};
//! use planmark::Sections;
//!
//! fn main() -> planmark::Result<()> {
//!     let sections: Sections = [("Intro", "* Hello")].into_iter().collect();
//!     let options = ConvertOptions::new().with_format(OutputFormat::Text);
//!     let result = convert_sections(&sections, &options)?;
//!     assert!(result.as_text().unwrap_or_default().contains("• Hello"));
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{DocumentModel, Metadata, Sections};
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::parser::{BuildOptions, DocumentBuilder};
use crate::render::{self, ConversionStats, JsonFormat, RenderOptions};

/// Options for end-to-end conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Normalization options
    pub normalize: NormalizeOptions,

    /// Build options
    pub build: BuildOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }

    /// Set build options.
    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format
    #[default]
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json,

    /// Word-processor document
    Docx,
}

impl OutputFormat {
    /// All formats, in the order the CLI writes them.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Docx,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Docx => "docx",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Check if the output is binary.
    pub fn is_binary(&self) -> bool {
        matches!(self, OutputFormat::Docx)
    }

    /// Check if this build can produce the format.
    pub fn is_available(&self) -> bool {
        !matches!(self, OutputFormat::Docx) || cfg!(feature = "docx")
    }

    /// Guess the format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "docx" | "word" => Ok(OutputFormat::Docx),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Rendered content
    pub content: Vec<u8>,

    /// The intermediate document model
    pub document: DocumentModel,

    /// Statistics of the document model
    pub stats: ConversionStats,

    /// Format of the content
    pub format: OutputFormat,
}

impl ConvertResult {
    /// Get content as text, for non-binary formats.
    pub fn as_text(&self) -> Option<&str> {
        if self.format.is_binary() {
            return None;
        }
        std::str::from_utf8(&self.content).ok()
    }

    /// Get document metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.document.metadata
    }

    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Normalize sections, build the model, and render it.
///
/// The model's metadata carries the report title, the company name as
/// author, and the conversion time.
pub fn convert_sections(sections: &Sections, options: &ConvertOptions) -> Result<ConvertResult> {
    let document = Normalizer::new(options.normalize.clone())
        .normalize_report(sections)
        .build(&options.build);
    finish(document, options)
}

/// Build the model from Markdown and render it.
pub fn convert_markdown(markdown: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    let document = DocumentBuilder::new(options.build.clone()).build(markdown);
    finish(document, options)
}

/// Render a document model in the given format.
pub fn render_document(
    doc: &DocumentModel,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Markdown => render::to_markdown(doc, options)?.into_bytes(),
        OutputFormat::Text => render::to_text(doc, options)?.into_bytes(),
        OutputFormat::Json => render::to_json(doc, JsonFormat::Pretty)?.into_bytes(),
        OutputFormat::Docx => render_docx(doc, options)?,
    };
    Ok(bytes)
}

#[cfg(feature = "docx")]
fn render_docx(doc: &DocumentModel, options: &RenderOptions) -> Result<Vec<u8>> {
    render::to_docx(doc, options)
}

#[cfg(not(feature = "docx"))]
fn render_docx(_doc: &DocumentModel, _options: &RenderOptions) -> Result<Vec<u8>> {
    Err(Error::UnsupportedFormat(
        "docx (built without the `docx` feature)".to_string(),
    ))
}

fn finish(document: DocumentModel, options: &ConvertOptions) -> Result<ConvertResult> {
    let content = render_document(&document, options.output_format, &options.render)?;
    let stats = ConversionStats::from_document(&document);
    log::debug!(
        "Converted {} blocks to {} ({} bytes)",
        stats.block_count(),
        options.output_format.extension(),
        content.len()
    );
    Ok(ConvertResult {
        content,
        document,
        stats,
        format: options.output_format,
    })
}
