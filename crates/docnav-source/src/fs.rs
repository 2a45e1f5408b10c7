//! Filesystem document source.
//!
//! Walks a content directory and turns every `.md`/`.mdx` file into a
//! [`Document`] whose id is the root-relative path joined with `/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, DocumentSource, SourceError};
use crate::front_matter::parse_document_data;

/// Markdown extensions recognised as documents.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Document source backed by a directory of markdown files.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect markdown file paths below `dir`, skipping hidden entries.
    fn scan_directory(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                Self::scan_directory(&path, files)?;
            } else if path
                .extension()
                .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext == *e))
            {
                files.push(path);
            }
        }
        Ok(())
    }

    /// Convert an absolute file path into a slash-delimited document id.
    fn document_id(&self, path: &Path) -> Result<String, SourceError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| SourceError::InvalidPath(path.to_path_buf()))?;

        let mut components = Vec::new();
        for component in relative.components() {
            let part = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| SourceError::InvalidPath(path.to_path_buf()))?;
            components.push(part);
        }
        Ok(components.join("/"))
    }
}

impl DocumentSource for FsSource {
    /// Scan the content root.
    ///
    /// Returns an empty Vec if the root directory doesn't exist. Documents are
    /// sorted by id so repeated scans yield identical input.
    fn documents(&self) -> Result<Vec<Document>, SourceError> {
        if !self.root.exists() {
            tracing::debug!(root = %self.root.display(), "Content root missing, no documents");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        Self::scan_directory(&self.root, &mut files)?;

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let content = fs::read_to_string(&path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
            let data = parse_document_data(&content, &path)?;
            documents.push(Document {
                id: self.document_id(&path)?,
                data,
            });
        }
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        tracing::debug!(
            root = %self.root.display(),
            count = documents.len(),
            "Scanned documents"
        );
        Ok(documents)
    }
}
