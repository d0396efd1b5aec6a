//! Markdown normalization of generated report sections.
//!
//! The normalizer assembles one Markdown document from a list of named
//! sections: a title, a company heading, then every section under its own
//! `##` heading with bullet-like lines rewritten to `- ` syntax.
//!
//! # Example
//!
//! ```
//! use planmark::normalize::Normalizer;
//! use planmark::Sections;
//!
//! let sections: Sections = [("Intro", "* first\n* second")].into_iter().collect();
//! let markdown = Normalizer::default().normalize(&sections, "Solaris");
//! assert!(markdown.contains("## Intro\n\n- first\n- second\n"));
//! ```

mod bullets;
mod company;
mod options;

pub use bullets::{canonicalize_line, numbered_bullet_hybrid};
pub use company::{CompanyNameExtractor, COMPANY_NAME_PLACEHOLDER};
pub use options::NormalizeOptions;

use crate::model::{DocumentModel, Metadata, Sections};
use crate::parser::{BuildOptions, DocumentBuilder};
use chrono::Utc;
use unicode_normalization::UnicodeNormalization;

/// Normalized Markdown together with the report's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedReport {
    /// The assembled Markdown document
    pub markdown: String,

    /// Title, company name as author, and normalization time
    pub metadata: Metadata,
}

impl NormalizedReport {
    /// Build the document model and attach the report metadata.
    pub fn build(&self, options: &BuildOptions) -> DocumentModel {
        DocumentBuilder::new(options.clone())
            .build(&self.markdown)
            .with_metadata(self.metadata.clone())
    }
}

/// Builds normalized Markdown from report sections.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    extractor: CompanyNameExtractor,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        let extractor = CompanyNameExtractor::new().with_placeholder(options.placeholder.clone());
        Self { options, extractor }
    }

    /// Get the options in use.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Resolve the company name from the first section's text.
    pub fn company_name(&self, sections: &Sections) -> String {
        let text = sections.first().map(|s| s.content.as_str()).unwrap_or("");
        self.extractor.extract(text)
    }

    /// Normalize sections, resolving the company name from the first section.
    pub fn normalize_sections(&self, sections: &Sections) -> String {
        let company = self.company_name(sections);
        self.normalize(sections, &company)
    }

    /// Normalize sections and collect the report metadata.
    pub fn normalize_report(&self, sections: &Sections) -> NormalizedReport {
        let company = self.company_name(sections);
        let markdown = self.normalize(sections, &company);
        let metadata =
            Metadata::new(self.options.title.clone(), company).created_at(Utc::now());
        NormalizedReport { markdown, metadata }
    }

    /// Normalize sections under the given company name.
    pub fn normalize(&self, sections: &Sections, company_name: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.options.title));
        output.push_str(&format!(
            "## {}{}\n\n",
            self.options.company_label, company_name
        ));

        for section in sections {
            output.push_str(&format!("## {}\n\n", section.name));

            let content = if self.options.normalize_unicode {
                section.content.nfc().collect::<String>()
            } else {
                section.content.clone()
            };

            for line in content.split('\n') {
                output.push_str(&canonicalize_line(line, &self.options));
                output.push('\n');
            }
            output.push('\n');
        }

        log::debug!(
            "Normalized {} sections into {} bytes of Markdown",
            sections.len(),
            output.len()
        );

        output
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}
