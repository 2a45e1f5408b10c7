//! Document records and the source trait.
//!
//! # Id Convention
//!
//! Document ids are slash-delimited paths relative to the content root,
//! including the file extension:
//! - `"index.md"` - root landing page
//! - `"00-guide/01-install.md"` - nested page with ordering prefixes
//! - `"ja/guide/install.md"` - translated copy under a locale directory

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Front-matter fields the navigation cares about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    /// Draft documents are excluded from production navigation.
    #[serde(default)]
    pub draft: bool,
    /// Full document title.
    pub title: String,
    /// Optional shorter title preferred in navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
}

impl DocumentData {
    /// Title shown in navigation (`short_title` if set, else `title`).
    #[must_use]
    pub fn nav_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }
}

/// A content document as yielded by a [`DocumentSource`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Slash-delimited path uniquely identifying the document.
    pub id: String,
    /// Parsed front-matter.
    pub data: DocumentData,
}

impl Document {
    /// Create a non-draft document with the given id and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: DocumentData {
                draft: false,
                title: title.into(),
                short_title: None,
            },
        }
    }

    /// Mark the document as a draft.
    #[must_use]
    pub fn draft(mut self) -> Self {
        self.data.draft = true;
        self
    }

    /// Set the navigation short title.
    #[must_use]
    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.data.short_title = Some(short_title.into());
        self
    }
}

/// Error returned when a source cannot produce its documents.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error while reading the content tree.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Front-matter block missing or malformed.
    #[error("Invalid front-matter in {}: {message}", path.display())]
    FrontMatter {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// Path could not be expressed as a document id.
    #[error("Invalid document path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Producer of the flat document collection.
///
/// Implementations are queried once per navigation build; nothing is cached
/// between calls.
pub trait DocumentSource: Send + Sync {
    /// Fetch every document in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing store cannot be read.
    fn documents(&self) -> Result<Vec<Document>, SourceError>;
}
