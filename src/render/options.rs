//! Rendering options and configuration.

/// Options for rendering a document model.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Character to use for Markdown bullet markers. The builder only
    /// reads `-`, so other markers do not survive a rebuild.
    pub list_marker: char,

    /// Symbol placed before bullet items in plain text and DOCX output
    pub bullet_symbol: char,

    /// Underline headings in plain text output
    pub underline_headings: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the Markdown list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the bullet symbol for plain text and DOCX output.
    pub fn with_bullet_symbol(mut self, symbol: char) -> Self {
        self.bullet_symbol = symbol;
        self
    }

    /// Enable or disable heading underlines in plain text.
    pub fn with_heading_underline(mut self, underline: bool) -> Self {
        self.underline_headings = underline;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            list_marker: '-',
            bullet_symbol: '•',
            underline_headings: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_list_marker('*')
            .with_heading_underline(false);

        assert!(options.include_frontmatter);
        assert_eq!(options.list_marker, '*');
        assert_eq!(options.bullet_symbol, '•');
        assert!(!options.underline_headings);
    }
}
