//! Rendering module for converting document models to output formats.

#[cfg(feature = "docx")]
mod docx;
mod json;
mod markdown;
mod options;
mod renderer;
mod result;
mod text;

#[cfg(feature = "docx")]
pub use docx::{to_docx, DocxRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use renderer::{render_block, render_with, BlockRenderer};
pub use result::{ConversionStats, RenderResult};
pub use text::{to_text, TextRenderer};
