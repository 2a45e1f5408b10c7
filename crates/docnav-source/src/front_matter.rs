//! YAML front-matter parsing.

use std::path::Path;

use crate::document::{DocumentData, SourceError};

/// Return the YAML text between the opening and closing `---` fences.
///
/// The opening fence must be the first line of the file.
pub(crate) fn extract_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse [`DocumentData`] from a markdown file's content.
///
/// # Errors
///
/// Returns [`SourceError::FrontMatter`] if the block is missing or the YAML
/// does not describe a document (e.g. no `title`).
pub(crate) fn parse_document_data(content: &str, path: &Path) -> Result<DocumentData, SourceError> {
    let yaml = extract_front_matter(content).ok_or_else(|| SourceError::FrontMatter {
        path: path.to_path_buf(),
        message: "missing front-matter block".to_owned(),
    })?;

    serde_yaml::from_str(yaml).map_err(|e| SourceError::FrontMatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
