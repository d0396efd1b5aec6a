//! Report sections.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One named chunk of generated report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, unique within a report
    pub name: String,

    /// Raw text produced upstream
    pub content: String,
}

impl Section {
    /// Create a new section.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered mapping of section name to content.
///
/// Insertion order is preserved. Inserting an existing name replaces its
/// content in place.
///
/// Serializes as a JSON object; deserializes from either an object (key
/// order preserved) or an array of `{"name", "content"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    items: Vec<Section>,
}

impl Sections {
    /// Create an empty section list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, returning the previous content if the name existed.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let name = name.into();
        let content = content.into();
        match self.items.iter_mut().find(|s| s.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.content, content)),
            None => {
                self.items.push(Section { name, content });
                None
            }
        }
    }

    /// Get the content of a section by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.content.as_str())
    }

    /// Get the first section.
    pub fn first(&self) -> Option<&Section> {
        self.items.first()
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over sections in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.items.iter()
    }

    /// Get section names in order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.name.as_str()).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Sections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sections = Sections::new();
        for (name, content) in iter {
            sections.insert(name, content);
        }
        sections
    }
}

impl From<Vec<Section>> for Sections {
    fn from(items: Vec<Section>) -> Self {
        items.into_iter().map(|s| (s.name, s.content)).collect()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for section in &self.items {
            map.serialize_entry(&section.name, &section.content)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SectionsVisitor)
    }
}

struct SectionsVisitor;

impl<'de> Visitor<'de> for SectionsVisitor {
    type Value = Sections;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section names to text, or a list of sections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sections, A::Error> {
        let mut sections = Sections::new();
        while let Some((name, content)) = map.next_entry::<String, String>()? {
            sections.insert(name, content);
        }
        Ok(sections)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Sections, A::Error> {
        let mut sections = Sections::new();
        while let Some(section) = seq.next_element::<Section>()? {
            if sections.insert(section.name.clone(), section.content).is_some() {
                return Err(de::Error::custom(format!(
                    "duplicate section name: {}",
                    section.name
                )));
            }
        }
        Ok(sections)
    }
}
