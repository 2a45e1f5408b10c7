//! Path utilities for document ids.
//!
//! Ids are slash-delimited; any component may carry a numeric ordering
//! prefix such as `00-` which is hidden from titles and slugs.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::NavError;

/// Matches a leading ordering prefix like `02-`.
static ORDER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+-").unwrap());

/// Split a path into its parent directory and last component.
///
/// Root-level paths have an empty parent.
///
/// ```
/// use docnav_nav::split_path;
///
/// assert_eq!(split_path("guide/setup/install.md"), ("guide/setup", "install.md"));
/// assert_eq!(split_path("index.md"), ("", "index.md"));
/// ```
#[must_use]
pub fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

/// Convert an id like `00-my-dir/00-my-page.md` to `"My page"`.
///
/// Takes the last component, strips its extension and ordering prefix, and
/// joins the dash-separated words in sentence case.
///
/// # Errors
///
/// Returns [`NavError::EmptyTitle`] if nothing remains of the file name.
pub fn id_to_title(id: &str) -> Result<String, NavError> {
    let (_, filename) = split_path(id);
    let stem = filename.rfind('.').map_or(filename, |dot| &filename[..dot]);
    let stem = ORDER_PREFIX.replace(stem, "");

    let mut words = stem.split('-');
    let mut first = words
        .next()
        .filter(|w| !w.is_empty())
        .ok_or_else(|| NavError::EmptyTitle { id: id.to_owned() })?
        .chars();

    let mut title = String::with_capacity(stem.len());
    title.extend(first.next().into_iter().flat_map(char::to_uppercase));
    title.push_str(first.as_str());
    for word in words {
        title.push(' ');
        title.push_str(word);
    }
    Ok(title)
}

/// Derive the normalized address of an id.
///
/// Strips a `.md`/`.mdx` extension, folds a trailing `/index` into its
/// directory, removes ordering prefixes from every component and applies
/// `overrides` to the remaining component names.
///
/// ```
/// use std::collections::HashMap;
/// use docnav_nav::id_to_slug;
///
/// let overrides = HashMap::new();
/// assert_eq!(id_to_slug("02-setup/01-install.md", &overrides), "setup/install");
/// assert_eq!(id_to_slug("docs/index.md", &overrides), "docs");
/// ```
#[must_use]
pub fn id_to_slug(id: &str, overrides: &HashMap<String, String>) -> String {
    let without_ext = id
        .strip_suffix(".mdx")
        .or_else(|| id.strip_suffix(".md"))
        .unwrap_or(id);
    let collapsed = without_ext.strip_suffix("/index").unwrap_or(without_ext);

    collapsed
        .split('/')
        .map(|component| {
            let part = ORDER_PREFIX.replace(component, "");
            match overrides.get(part.as_ref()) {
                Some(replacement) => replacement.clone(),
                None => part.into_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
