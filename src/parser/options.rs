//! Build options and configuration.

/// What to do with a non-table line that appears while table rows are pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrayLinePolicy {
    /// Close the pending table, then handle the line normally
    #[default]
    CloseTable,
    /// Drop lines that would become paragraphs; other blocks are still emitted
    Drop,
}

/// Options for building a document model from Markdown.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Handling of non-pipe lines between table rows
    pub stray_lines: StrayLinePolicy,

    /// Treat `# ` lines as level-1 headings (otherwise they are paragraphs)
    pub recognize_title: bool,

    /// Whether to use parallel processing in [`super::build_many`]
    pub parallel: bool,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the output of earlier releases: stray lines
    /// inside tables are dropped and `# ` lines stay paragraphs.
    pub fn compat() -> Self {
        Self {
            stray_lines: StrayLinePolicy::Drop,
            recognize_title: false,
            ..Self::default()
        }
    }

    /// Set the stray line policy.
    pub fn with_stray_lines(mut self, policy: StrayLinePolicy) -> Self {
        self.stray_lines = policy;
        self
    }

    /// Enable or disable level-1 title headings.
    pub fn with_title(mut self, recognize: bool) -> Self {
        self.recognize_title = recognize;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            stray_lines: StrayLinePolicy::CloseTable,
            recognize_title: true,
            parallel: true,
        }
    }
}
