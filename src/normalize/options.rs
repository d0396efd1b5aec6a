//! Normalization options.

use super::COMPANY_NAME_PLACEHOLDER;

/// Options for assembling normalized Markdown.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Text of the level-1 title heading
    pub title: String,

    /// Prefix placed before the company name in its heading
    pub company_label: String,

    /// Company name used when extraction finds nothing
    pub placeholder: String,

    /// Rewrite `N. *text` lines as bullets
    pub fix_numbered_bullets: bool,

    /// Normalize section content to Unicode NFC
    pub normalize_unicode: bool,
}

impl NormalizeOptions {
    /// Create new normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title heading text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the company heading label.
    pub fn with_company_label(mut self, label: impl Into<String>) -> Self {
        self.company_label = label.into();
        self
    }

    /// Set the placeholder used when no company name is found.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable or disable the numbered-bullet rewrite.
    pub fn with_numbered_bullet_fix(mut self, enabled: bool) -> Self {
        self.fix_numbered_bullets = enabled;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            title: "Business Plan".to_string(),
            company_label: "Entreprise: ".to_string(),
            placeholder: COMPANY_NAME_PLACEHOLDER.to_string(),
            fix_numbered_bullets: true,
            normalize_unicode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_options_builder() {
        let options = NormalizeOptions::new()
            .with_title("Plan")
            .with_placeholder("unknown")
            .with_numbered_bullet_fix(false);

        assert_eq!(options.title, "Plan");
        assert_eq!(options.placeholder, "unknown");
        assert!(!options.fix_numbered_bullets);
        assert!(options.normalize_unicode);
    }
}
