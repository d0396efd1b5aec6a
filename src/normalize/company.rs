//! Best-effort company name extraction from generated text.

use regex::Regex;

/// Name used when no lead-in phrase is found.
pub const COMPANY_NAME_PLACEHOLDER: &str = "Nom de l'entreprise non trouvé";

/// Finds a company name after a French lead-in phrase.
///
/// Recognized lead-ins (case-insensitive): `nom de l'entreprise est`,
/// `nom de l'entreprise`, `la vision de`. The name is the run of word
/// characters, spaces and tabs after the phrase on the same line, trimmed. Extraction never fails;
/// a miss yields the placeholder.
#[derive(Debug, Clone)]
pub struct CompanyNameExtractor {
    pattern: Regex,
    placeholder: String,
}

impl CompanyNameExtractor {
    /// Create an extractor with the default placeholder.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(
                r"(?i)(nom de l['’]entreprise est|nom de l['’]entreprise|la vision de) ([\w\t ]+)",
            )
            .expect("company name pattern is valid"),
            placeholder: COMPANY_NAME_PLACEHOLDER.to_string(),
        }
    }

    /// Set the placeholder returned on a miss.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Find the company name, if any lead-in phrase matches.
    pub fn find(&self, text: &str) -> Option<String> {
        let name = self.pattern.captures(text)?.get(2)?.as_str().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Extract the company name, falling back to the placeholder.
    pub fn extract(&self, text: &str) -> String {
        match self.find(text) {
            Some(name) => name,
            None => {
                log::debug!("No company name lead-in found, using placeholder");
                self.placeholder.clone()
            }
        }
    }
}

impl Default for CompanyNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}
