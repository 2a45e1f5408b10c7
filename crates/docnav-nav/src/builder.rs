//! Navigation tree builder.
//!
//! Unflattens a document collection into [`NavEntry`] values grouped
//! recursively by directory. For example, the collection
//!
//! ```text
//! foo/page1.md
//! bar/page2.md
//! ```
//!
//! becomes two directories `bar` and `foo`, each holding one file.
//!
//! # Architecture
//!
//! Directories live in a flat arena indexed by path while documents are
//! attached, with children tracked by arena index. Every directory is created
//! after its parent, so assembling the nested tree in reverse creation order
//! always finds a directory's children already complete. This lets sorting,
//! index-title promotion and the completeness check run in one bottom-up pass
//! without recursion.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use docnav_source::Document;

use crate::config::NavConfig;
use crate::entry::{NavDirectory, NavEntry, NavFile};
use crate::error::NavError;
use crate::path::{id_to_slug, id_to_title, split_path};

/// Arena index of the root directory (path `""`).
const ROOT: usize = 0;

/// Inclusion predicate that drops drafts.
#[must_use]
pub fn published(document: &Document) -> bool {
    !document.data.draft
}

/// Build the navigation forest for a document collection.
///
/// Documents rejected by `include` are left out entirely. The returned
/// entries are the children of the root directory.
///
/// # Errors
///
/// Returns an error if a directory or document title cannot be derived, or
/// if the resulting tree does not account for every included document
/// exactly once.
pub fn build_nav<F>(
    documents: Vec<Document>,
    config: &NavConfig,
    include: F,
) -> Result<Vec<NavEntry>, NavError>
where
    F: Fn(&Document) -> bool,
{
    let files: Vec<Document> = documents.into_iter().filter(|doc| include(doc)).collect();

    let mut dir_paths: Vec<&str> = files
        .iter()
        .map(|file| split_path(&file.id).0)
        .filter(|dir| !dir.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    // Shortest first so parents usually exist before their children
    dir_paths.sort_by_key(|path| path.len());

    let mut arena = DirectoryArena::new(config);
    for path in dir_paths {
        arena.ensure_directory(path)?;
    }

    let expected = files.len();
    let source_ids: HashSet<String> = files.iter().map(|file| file.id.clone()).collect();
    for file in files {
        arena.add_file(file)?;
    }

    let directory_count = arena.nodes.len() - 1;
    let (root, found) = arena.assemble(&source_ids)?;
    if found != expected {
        return Err(NavError::FileCountMismatch { found, expected });
    }

    tracing::debug!(
        files = found,
        directories = directory_count,
        "Built navigation tree"
    );
    Ok(root)
}

/// Index first, then ascending id.
fn compare_entries(a: &NavEntry, b: &NavEntry) -> Ordering {
    b.is_index()
        .cmp(&a.is_index())
        .then_with(|| a.id().cmp(b.id()))
}

enum Child {
    Directory(usize),
    File(NavFile),
}

struct DirectoryNode {
    id: String,
    href: String,
    slug: String,
    dirname: String,
    title: String,
    is_language_directory: bool,
    children: Vec<Child>,
}

struct DirectoryArena<'a> {
    config: &'a NavConfig,
    nodes: Vec<DirectoryNode>,
    by_path: HashMap<String, usize>,
}

impl<'a> DirectoryArena<'a> {
    fn new(config: &'a NavConfig) -> Self {
        let root = DirectoryNode {
            id: String::new(),
            href: config.href(""),
            slug: String::new(),
            dirname: String::new(),
            title: String::new(),
            is_language_directory: false,
            children: Vec::new(),
        };
        Self {
            config,
            nodes: vec![root],
            by_path: HashMap::from([(String::new(), ROOT)]),
        }
    }

    /// Return the arena index for `path`, creating it and any missing
    /// ancestors.
    fn ensure_directory(&mut self, path: &str) -> Result<usize, NavError> {
        if let Some(&idx) = self.by_path.get(path) {
            return Ok(idx);
        }

        let mut missing = vec![path];
        let mut current = path;
        loop {
            let (parent, _) = split_path(current);
            if self.by_path.contains_key(parent) {
                break;
            }
            missing.push(parent);
            current = parent;
        }

        let mut idx = ROOT;
        for dir_path in missing.into_iter().rev() {
            idx = self.create_directory(dir_path)?;
        }
        Ok(idx)
    }

    fn create_directory(&mut self, path: &str) -> Result<usize, NavError> {
        let (parent_path, dirname) = split_path(path);
        let parent = *self
            .by_path
            .get(parent_path)
            .ok_or_else(|| NavError::MissingParentDirectory {
                path: path.to_owned(),
            })?;

        let slug = id_to_slug(path, &self.config.slug_overrides);
        let idx = self.nodes.len();
        self.nodes.push(DirectoryNode {
            id: path.to_owned(),
            href: self.config.href(&slug),
            slug,
            dirname: dirname.to_owned(),
            title: id_to_title(path)?,
            is_language_directory: self.config.is_locale(path),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(Child::Directory(idx));
        self.by_path.insert(path.to_owned(), idx);
        Ok(idx)
    }

    fn add_file(&mut self, document: Document) -> Result<(), NavError> {
        let (parent_path, filename) = split_path(&document.id);
        let parent = *self
            .by_path
            .get(parent_path)
            .ok_or_else(|| NavError::ParentNotFound {
                parent: parent_path.to_owned(),
                file: filename.to_owned(),
            })?;

        let slug = id_to_slug(&document.id, &self.config.slug_overrides);
        let file = NavFile {
            id: document.id.clone(),
            href: self.config.href(&slug),
            is_index: slug == self.nodes[parent].slug,
            slug,
            title: document.data.nav_title().to_owned(),
            document,
        };
        self.nodes[parent].children.push(Child::File(file));
        Ok(())
    }

    /// Nest the arena into a forest, returning the root entries and the
    /// number of files placed.
    fn assemble(self, source_ids: &HashSet<String>) -> Result<(Vec<NavEntry>, usize), NavError> {
        let mut built: Vec<Option<NavDirectory>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);
        let mut file_count = 0;
        let mut root = Vec::new();

        for (idx, node) in self.nodes.into_iter().enumerate().rev() {
            let mut entries = Vec::with_capacity(node.children.len());
            for child in node.children {
                match child {
                    Child::Directory(child_idx) => {
                        // A child missing here surfaces as a file count mismatch
                        if let Some(dir) = built[child_idx].take() {
                            entries.push(NavEntry::Directory(dir));
                        }
                    }
                    Child::File(file) => {
                        if !source_ids.contains(&file.id) {
                            return Err(NavError::UnknownFile { id: file.id });
                        }
                        file_count += 1;
                        entries.push(NavEntry::File(file));
                    }
                }
            }
            entries.sort_by(compare_entries);

            if idx == ROOT {
                root = entries;
                continue;
            }

            // Adopt the index page title; the last matching child wins
            let mut title = node.title;
            for entry in &entries {
                if entry.slug() == node.slug {
                    title = entry.title().to_owned();
                }
            }

            built[idx] = Some(NavDirectory {
                id: node.id,
                href: node.href,
                slug: node.slug,
                dirname: node.dirname,
                title,
                entries,
                is_language_directory: node.is_language_directory,
            });
        }

        Ok((root, file_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::lookup::flatten;

    fn docs(ids: &[&str]) -> Vec<Document> {
        ids.iter()
            .map(|id| Document::new(*id, format!("Title of {id}")))
            .collect()
    }

    fn build(ids: &[&str]) -> Vec<NavEntry> {
        build_nav(docs(ids), &NavConfig::default(), published).unwrap()
    }

    fn ids(entries: &[NavEntry]) -> Vec<&str> {
        entries.iter().map(NavEntry::id).collect()
    }

    #[test]
    fn test_empty_collection_returns_empty_forest() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn test_root_files_stay_at_top_level() {
        let nav = build(&["b.md", "a.md"]);

        assert_eq!(ids(&nav), ["a.md", "b.md"]);
        assert!(nav.iter().all(|e| e.as_file().is_some()));
    }

    #[test]
    fn test_groups_files_by_directory() {
        let nav = build(&["foo/page1.md", "bar/page2.md"]);

        assert_eq!(ids(&nav), ["bar", "foo"]);
        assert_eq!(ids(nav[0].entries()), ["bar/page2.md"]);
        assert_eq!(ids(nav[1].entries()), ["foo/page1.md"]);
    }

    #[test]
    fn test_creates_intermediate_directories() {
        let nav = build(&["a/b/c/deep.md"]);

        assert_eq!(ids(&nav), ["a"]);
        let b = &nav[0].entries()[0];
        assert_eq!(b.id(), "a/b");
        let c = &b.entries()[0];
        assert_eq!(c.id(), "a/b/c");
        assert_eq!(c.as_directory().unwrap().dirname, "c");
        assert_eq!(ids(c.entries()), ["a/b/c/deep.md"]);
    }

    #[test]
    fn test_index_file_sorts_first() {
        let nav = build(&["dir/b.md", "dir/a.md", "dir/index.md"]);

        assert_eq!(ids(nav[0].entries()), ["dir/index.md", "dir/a.md", "dir/b.md"]);
        assert!(nav[0].entries()[0].is_index());
        assert!(!nav[0].entries()[1].is_index());
    }

    #[test]
    fn test_directories_and_files_sort_by_id() {
        let nav = build(&["dir/02-z.md", "dir/01-sub/x.md", "dir/00-a.md"]);

        assert_eq!(ids(nav[0].entries()), ["dir/00-a.md", "dir/01-sub", "dir/02-z.md"]);
    }

    #[test]
    fn test_index_title_promoted_to_directory() {
        let documents = vec![
            Document::new("guide/index.md", "Guide Overview"),
            Document::new("guide/setup.md", "Setup"),
        ];

        let nav = build_nav(documents, &NavConfig::default(), published).unwrap();

        assert_eq!(nav[0].title(), "Guide Overview");
        assert_eq!(nav[0].href(), "/docs/guide");
    }

    #[test]
    fn test_directory_without_index_uses_derived_title() {
        let nav = build(&["01-getting-started/a.md"]);

        assert_eq!(nav[0].title(), "Getting started");
        assert_eq!(nav[0].slug(), "getting-started");
    }

    #[test]
    fn test_promoted_title_prefers_short_title() {
        let documents = vec![
            Document::new("00-api/index.md", "API Reference Manual").with_short_title("API"),
        ];

        let nav = build_nav(documents, &NavConfig::default(), published).unwrap();

        assert_eq!(nav[0].title(), "API");
    }

    #[test]
    fn test_nested_promotion_uses_child_directory_title() {
        // Directory "guide/index" has the same slug as "guide"
        let documents = vec![Document::new("guide/index/intro.md", "Intro")];
        let mut nav = build_nav(documents, &NavConfig::default(), published).unwrap();

        let guide = nav.remove(0);
        assert_eq!(guide.entries()[0].slug(), "guide");
        assert_eq!(guide.title(), guide.entries()[0].title());
    }

    #[test]
    fn test_file_href_uses_slug() {
        let nav = build(&["02-setup/01-install.md"]);

        let install = &nav[0].entries()[0];
        assert_eq!(install.slug(), "setup/install");
        assert_eq!(install.href(), "/docs/setup/install");
    }

    #[test]
    fn test_drafts_filtered_by_predicate() {
        let documents = vec![
            Document::new("a.md", "A"),
            Document::new("wip/b.md", "B").draft(),
        ];

        let nav = build_nav(documents.clone(), &NavConfig::default(), published).unwrap();
        assert_eq!(ids(&nav), ["a.md"]);

        let all = build_nav(documents, &NavConfig::default(), |_| true).unwrap();
        assert_eq!(ids(&all), ["a.md", "wip"]);
    }

    #[test]
    fn test_language_directory_marked_from_config() {
        let config = NavConfig {
            locales: vec!["ja".to_owned()],
            ..NavConfig::default()
        };

        let nav = build_nav(docs(&["ja/page.md", "page.md", "guide/ja/x.md"]), &config, published)
            .unwrap();

        assert!(nav.iter().find(|e| e.id() == "ja").unwrap().is_language_directory());
        let nested = flatten(&nav)
            .into_iter()
            .find(|e| e.id() == "guide/ja")
            .unwrap();
        assert!(!nested.is_language_directory());
    }

    #[test]
    fn test_slug_override_applied_to_files() {
        let nav = build(&["CONTRIBUTING.md"]);

        assert_eq!(nav[0].href(), "/docs/contributing");
    }

    #[test]
    fn test_every_document_appears_once() {
        let input = [
            "index.md",
            "a/index.md",
            "a/one.md",
            "a/b/two.md",
            "a/b/c/three.md",
            "d/four.md",
        ];
        let nav = build(&input);

        let mut files: Vec<&str> = flatten(&nav)
            .into_iter()
            .filter(|e| e.as_file().is_some())
            .map(NavEntry::id)
            .collect();
        files.sort_unstable();
        let mut expected = input.to_vec();
        expected.sort_unstable();

        assert_eq!(files, expected);
    }

    #[test]
    fn test_root_index_is_not_marked_index() {
        let nav = build(&["index.md"]);

        assert!(!nav[0].is_index());
        assert_eq!(nav[0].href(), "/docs/index");
    }

    #[test]
    fn test_empty_directory_title_is_error() {
        let err = build_nav(docs(&["00-/page.md"]), &NavConfig::default(), published).unwrap_err();

        assert!(matches!(err, NavError::EmptyTitle { ref id } if id == "00-"));
    }

    #[test]
    fn test_duplicate_ids_are_unchecked() {
        // Sources must yield unique ids; a repeat is not detected
        let nav = build(&["a/x.md", "a/x.md"]);

        assert_eq!(nav[0].entries().len(), 2);
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let config = NavConfig::default();
        let mut arena = DirectoryArena::new(&config);

        let first = arena.ensure_directory("a/b/c").unwrap();
        let second = arena.ensure_directory("a/b/c").unwrap();
        let parent = arena.ensure_directory("a/b").unwrap();

        assert_eq!(first, second);
        assert!(parent < first);
        assert_eq!(arena.nodes.len(), 4);
    }

    #[test]
    fn test_add_file_without_parent_is_error() {
        let config = NavConfig::default();
        let mut arena = DirectoryArena::new(&config);

        let err = arena
            .add_file(Document::new("missing/page.md", "Page"))
            .unwrap_err();

        assert!(matches!(
            err,
            NavError::ParentNotFound { ref parent, ref file } if parent == "missing" && file == "page.md"
        ));
    }

    #[test]
    fn test_assemble_rejects_file_not_in_source() {
        let config = NavConfig::default();
        let mut arena = DirectoryArena::new(&config);
        arena.add_file(Document::new("stray.md", "Stray")).unwrap();

        let err = arena.assemble(&HashSet::new()).unwrap_err();

        assert!(matches!(err, NavError::UnknownFile { ref id } if id == "stray.md"));
    }

    #[test]
    fn test_compare_entries_index_first() {
        let nav = build(&["d/index.md", "d/a.md"]);
        let entries = nav[0].entries();

        assert_eq!(compare_entries(&entries[0], &entries[1]), Ordering::Less);
        assert_eq!(compare_entries(&entries[1], &entries[0]), Ordering::Greater);
    }
}
