//! Document-level types.

use super::DocumentBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A converted document: an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Content blocks in source order
    pub blocks: Vec<DocumentBlock>,
}

impl DocumentModel {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks.
    pub fn from_blocks(blocks: Vec<DocumentBlock>) -> Self {
        Self {
            metadata: Metadata::default(),
            blocks,
        }
    }

    /// Set metadata and return self.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add a block to the document.
    pub fn push(&mut self, block: DocumentBlock) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentBlock> {
        self.blocks.iter()
    }

    /// Get the text of every heading, in order, with its level.
    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                DocumentBlock::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(DocumentBlock::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a DocumentModel {
    type Item = &'a DocumentBlock;
    type IntoIter = std::slice::Iter<'a, DocumentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author (the company name for generated reports)
    pub author: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title and author.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            created: None,
        }
    }

    /// Set the creation date and return self.
    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.created.is_none()
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_new() {
        let doc = DocumentModel::new();
        assert!(doc.is_empty());
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_headings_in_order() {
        let doc = DocumentModel::from_blocks(vec![
            DocumentBlock::heading(1, "Business Plan"),
            DocumentBlock::paragraph("body"),
            DocumentBlock::heading(2, "Intro"),
        ]);
        assert_eq!(doc.headings(), vec![(1, "Business Plan"), (2, "Intro")]);
    }

    #[test]
    fn test_metadata_frontmatter() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let metadata = Metadata::new("Business Plan", "Acme \"Solaire\"").created_at(created);

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Business Plan\""));
        assert!(yaml.contains("author: \"Acme \\\"Solaire\\\"\""));
        assert!(yaml.contains("created: 2024-03-01T12:00:00+00:00"));
    }

    #[test]
    fn test_plain_text() {
        let doc = DocumentModel::from_blocks(vec![
            DocumentBlock::heading(2, "Intro"),
            DocumentBlock::bullet("one"),
        ]);
        assert_eq!(doc.plain_text(), "Intro\n\none");
    }
}
