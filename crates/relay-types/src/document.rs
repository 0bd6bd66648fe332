use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DocumentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A document held by a document store.
///
/// Documents are never mutated in place. Editing produces a new record via
/// [`Document::with_content`] that keeps the id, title and metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Create a document with no metadata.
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId(id),
            title: title.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Add a metadata entry, replacing any previous value for `key`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// A copy of this document carrying `content` instead.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            content: content.into(),
            metadata: self.metadata.clone(),
        }
    }

    /// Whether the title or content contains `query` as a literal,
    /// case-sensitive substring.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.content.contains(query)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document(id: {}, title: {:?}, content: {:?}, metadata: {{",
            self.id, self.title, self.content
        )?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        f.write_str("})")
    }
}
