//! Navigation tree nodes.

use serde::Serialize;

use docnav_source::Document;

/// Leaf node backed by a source document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavFile {
    /// Document id (full path).
    pub id: String,
    /// Link target (`href_prefix` + slug).
    pub href: String,
    /// Normalized address derived from the id.
    pub slug: String,
    /// Display title (`shortTitle` or `title` of the document).
    pub title: String,
    /// True if this file is its parent directory's landing page.
    pub is_index: bool,
    /// Source document.
    pub document: Document,
}

/// Interior node synthesized for every distinct parent path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavDirectory {
    /// Full directory path.
    pub id: String,
    /// Link target (`href_prefix` + slug).
    pub href: String,
    /// Normalized address derived from the path.
    pub slug: String,
    /// Last component of the path.
    pub dirname: String,
    /// Display title; the index page title when one exists.
    pub title: String,
    /// Direct children, index page first then ordered by id.
    pub entries: Vec<NavEntry>,
    /// True if the full path is a configured locale code.
    pub is_language_directory: bool,
}

/// Navigation tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry {
    /// Document leaf.
    File(NavFile),
    /// Directory with children.
    Directory(NavDirectory),
}

impl NavEntry {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::File(file) => &file.id,
            Self::Directory(dir) => &dir.id,
        }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::File(file) => &file.href,
            Self::Directory(dir) => &dir.href,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::File(file) => &file.slug,
            Self::Directory(dir) => &dir.slug,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::File(file) => &file.title,
            Self::Directory(dir) => &dir.title,
        }
    }

    /// Direct children (empty for files).
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        match self {
            Self::File(_) => &[],
            Self::Directory(dir) => &dir.entries,
        }
    }

    /// True for a file that is its directory's index page.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::File(file) if file.is_index)
    }

    #[must_use]
    pub fn is_language_directory(&self) -> bool {
        matches!(self, Self::Directory(dir) if dir.is_language_directory)
    }

    #[must_use]
    pub fn as_directory(&self) -> Option<&NavDirectory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&NavFile> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    /// Replace link target and title, keeping identity and position.
    pub(crate) fn set_link(&mut self, href: String, title: String) {
        match self {
            Self::File(file) => {
                file.href = href;
                file.title = title;
            }
            Self::Directory(dir) => {
                dir.href = href;
                dir.title = title;
            }
        }
    }
}
