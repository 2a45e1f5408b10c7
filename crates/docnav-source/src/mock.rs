//! Mock document source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::document::{Document, DocumentSource, SourceError};

/// Mock source for testing.
///
/// Stores documents in memory. Use the builder methods to configure the
/// mock with test data.
///
/// # Example
///
/// ```ignore
/// use docnav_source::{DocumentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_document("guide/index.md", "Guide")
///     .with_draft("guide/wip.md", "Work in progress");
///
/// let docs = source.documents().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    documents: RwLock<Vec<Document>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a published document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.push(Document::new(id, title))
    }

    /// Add a draft document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_draft(self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.push(Document::new(id, title).draft())
    }

    /// Add a document with a navigation short title.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_short_title(
        self,
        id: impl Into<String>,
        title: impl Into<String>,
        short_title: impl Into<String>,
    ) -> Self {
        self.push(Document::new(id, title).with_short_title(short_title))
    }

    /// Add a document after construction, e.g. between two builds.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, document: Document) {
        self.documents.write().unwrap().push(document);
    }

    fn push(self, document: Document) -> Self {
        self.insert(document);
        self
    }
}

impl DocumentSource for MockSource {
    fn documents(&self) -> Result<Vec<Document>, SourceError> {
        Ok(self.documents.read().unwrap().clone())
    }
}
