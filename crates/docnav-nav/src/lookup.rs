//! Read-only traversal of a navigation forest.

use crate::entry::{NavDirectory, NavEntry};
use crate::error::NavError;
use crate::path::split_path;

/// Find a directory by walking one path component per level.
///
/// At each level the first directory whose `dirname` matches is descended
/// into; there is no backtracking to later siblings with the same name.
///
/// # Errors
///
/// Returns [`NavError::EmptyPathComponents`] if `components` is empty. A
/// missing directory is `Ok(None)`.
pub fn find_directory<'a, S: AsRef<str>>(
    nav: &'a [NavEntry],
    components: &[S],
) -> Result<Option<&'a NavDirectory>, NavError> {
    let Some((last, parents)) = components.split_last() else {
        return Err(NavError::EmptyPathComponents);
    };

    let mut entries = nav;
    for component in parents {
        match find_child_directory(entries, component.as_ref()) {
            Some(dir) => entries = &dir.entries,
            None => return Ok(None),
        }
    }
    Ok(find_child_directory(entries, last.as_ref()))
}

/// First directory among `entries` named `dirname`.
pub(crate) fn find_child_directory<'a>(
    entries: &'a [NavEntry],
    dirname: &str,
) -> Option<&'a NavDirectory> {
    entries
        .iter()
        .filter_map(NavEntry::as_directory)
        .find(|dir| dir.dirname == dirname)
}

/// Find the directory containing the entry `id`.
///
/// Root-level ids have no containing directory.
#[must_use]
pub fn find_parent_directory<'a>(nav: &'a [NavEntry], id: &str) -> Option<&'a NavDirectory> {
    let (parent, _) = split_path(id);
    let components: Vec<&str> = parent.split('/').collect();
    find_directory(nav, &components).ok().flatten()
}

/// Return the entries that path to `id`, from a root entry to the match.
///
/// Searches depth-first in tree order; the first match wins.
#[must_use]
pub fn find_entry_path<'a>(nav: &'a [NavEntry], id: &str) -> Option<Vec<&'a NavEntry>> {
    fn visit<'a>(entry: &'a NavEntry, id: &str, path: &mut Vec<&'a NavEntry>) -> bool {
        path.push(entry);
        if entry.id() == id {
            return true;
        }
        for child in entry.entries() {
            if visit(child, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    let found = nav.iter().any(|entry| visit(entry, id, &mut path));
    found.then_some(path)
}

/// Find the entry with the given id anywhere in the forest.
#[must_use]
pub fn find_entry<'a>(nav: &'a [NavEntry], id: &str) -> Option<&'a NavEntry> {
    find_entry_path(nav, id)?.pop()
}

/// Flatten the forest in depth-first pre-order.
///
/// Every directory precedes its descendants; both directories and files
/// are included.
#[must_use]
pub fn flatten(nav: &[NavEntry]) -> Vec<&NavEntry> {
    fn visit<'a>(entry: &'a NavEntry, result: &mut Vec<&'a NavEntry>) {
        result.push(entry);
        for child in entry.entries() {
            visit(child, result);
        }
    }

    let mut result = Vec::new();
    for entry in nav {
        visit(entry, &mut result);
    }
    result
}
