//! Line classification.

/// The shape of one trimmed Markdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line
    Blank,
    /// `# text`, holds the text
    Title(&'a str),
    /// `## text`, holds the text
    Heading(&'a str),
    /// `- text`, holds the text
    Bullet(&'a str),
    /// `N. text`, holds the whole line
    Numbered(&'a str),
    /// Pipe line made of dashes, colons and whitespace only
    TableSeparator,
    /// Any other pipe line, holds the whole line
    TableRow(&'a str),
    /// `**text**`, holds the inner text
    Bold(&'a str),
    /// Anything else
    Text(&'a str),
}

impl LineKind<'_> {
    /// Check if this line belongs to a table run.
    pub fn is_table_line(&self) -> bool {
        matches!(self, LineKind::TableSeparator | LineKind::TableRow(_))
    }
}

/// Classify a trimmed line. The first matching rule wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::Heading(rest);
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return LineKind::Title(rest);
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return LineKind::Bullet(rest);
    }
    if is_numbered(line) {
        return LineKind::Numbered(line);
    }
    if line.starts_with('|') {
        if super::is_separator_row(line) {
            return LineKind::TableSeparator;
        }
        return LineKind::TableRow(line);
    }
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        return LineKind::Bold(&line[2..line.len() - 2]);
    }
    LineKind::Text(line)
}

/// Digits, then `.`, then whitespace.
fn is_numbered(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let mut rest = line[digits..].chars();
    rest.next() == Some('.') && rest.next().is_some_and(char::is_whitespace)
}
