//! Navigation error types.

use docnav_source::SourceError;

/// Error returned when a navigation tree cannot be built or queried.
///
/// All variants except [`NavError::Source`] indicate a malformed document
/// id set or a caller contract violation and are not retried.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Derived title is empty (e.g. id `00-.md`).
    #[error("id {id} is empty (has no first word)")]
    EmptyTitle {
        /// Offending id.
        id: String,
    },
    /// Parent of a directory was not registered.
    ///
    /// Unreachable through [`build_nav`](crate::build_nav), which registers
    /// every ancestor before its children.
    #[error("parent directory of {path} was not registered")]
    MissingParentDirectory {
        /// Directory being created.
        path: String,
    },
    /// Parent directory of a file was not registered.
    #[error("parent directory {parent} not found for file {file}")]
    ParentNotFound {
        /// Parent directory path.
        parent: String,
        /// File name within the parent.
        file: String,
    },
    /// File in the tree does not correspond to any source document.
    #[error("file {id} not found in document collection")]
    UnknownFile {
        /// Id of the visited file.
        id: String,
    },
    /// Tree file count differs from the document count.
    #[error(
        "number of files in root nav ({found}) does not match number of files in collection ({expected})"
    )]
    FileCountMismatch {
        /// Files found in the tree.
        found: usize,
        /// Documents after filtering.
        expected: usize,
    },
    /// Directory lookup called with no path components.
    #[error("path components must not be empty; use the root nav for the root directory")]
    EmptyPathComponents,
    /// Product not in the configured product set.
    #[error("unknown product: {0}")]
    UnknownProduct(String),
    /// Document source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
