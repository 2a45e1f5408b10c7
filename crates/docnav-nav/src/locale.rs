//! Locale merging.
//!
//! Prioritises the current locale's language directory: with locale `ja`,
//! the entry `ja/page.md` lends its href and title to `page.md` when both
//! exist. Language directories are then dropped from the top level.

use std::collections::HashMap;

use crate::entry::NavEntry;
use crate::lookup::{find_child_directory, flatten};

/// Build the localised navigation for a product.
///
/// The input forest is never modified; the result is a patched copy owned by
/// the caller.
///
/// 1. If a top-level directory named `product` exists, only its entries are
///    kept (multiple products on one site).
/// 2. If `locale` names a directory in that forest, every entry below it
///    overlays the entry whose id equals its own id with the first
///    `"{locale}/"` removed. Entries with no counterpart are logged and
///    skipped.
/// 3. Language directories are removed from the top level only.
#[must_use]
pub fn localize(nav: &[NavEntry], product: &str, locale: Option<&str>) -> Vec<NavEntry> {
    let mut working = match find_child_directory(nav, product) {
        Some(dir) => dir.entries.clone(),
        None => nav.to_vec(),
    };

    if let Some(locale) = locale {
        apply_overlay(&mut working, locale);
    }

    working.retain(|entry| !entry.is_language_directory());
    working
}

/// Localised link of one entry, captured before any write.
struct Overlay {
    id: String,
    unlocalized_id: String,
    href: String,
    title: String,
}

fn apply_overlay(nav: &mut [NavEntry], locale: &str) {
    let Some(locale_dir) = find_child_directory(nav, locale) else {
        return;
    };

    // Substring removal, not anchored to a component boundary
    let prefix = format!("{locale}/");
    let overlays: Vec<Overlay> = flatten(&locale_dir.entries)
        .into_iter()
        .map(|entry| Overlay {
            id: entry.id().to_owned(),
            unlocalized_id: entry.id().replacen(&prefix, "", 1),
            href: entry.href().to_owned(),
            title: entry.title().to_owned(),
        })
        .collect();

    let index = EntryIndex::build(nav);
    let mut applied = 0;
    for overlay in overlays {
        match index.get_mut(nav, &overlay.unlocalized_id) {
            Some(entry) => {
                entry.set_link(overlay.href, overlay.title);
                applied += 1;
            }
            None => tracing::warn!(id = %overlay.id, "{} has no unlocalised equivalent", overlay.id),
        }
    }

    tracing::debug!(locale, applied, "Applied locale overlay");
}

/// Maps entry ids to their position (child index per level) in a forest.
///
/// Only the first entry in depth-first order is recorded for a repeated id.
struct EntryIndex {
    positions: HashMap<String, Vec<usize>>,
}

impl EntryIndex {
    fn build(nav: &[NavEntry]) -> Self {
        fn visit(
            entries: &[NavEntry],
            position: &mut Vec<usize>,
            positions: &mut HashMap<String, Vec<usize>>,
        ) {
            for (i, entry) in entries.iter().enumerate() {
                position.push(i);
                positions
                    .entry(entry.id().to_owned())
                    .or_insert_with(|| position.clone());
                visit(entry.entries(), position, positions);
                position.pop();
            }
        }

        let mut positions = HashMap::new();
        visit(nav, &mut Vec::new(), &mut positions);
        Self { positions }
    }

    fn get_mut<'a>(&self, nav: &'a mut [NavEntry], id: &str) -> Option<&'a mut NavEntry> {
        let (first, rest) = self.positions.get(id)?.split_first()?;
        let mut entry = nav.get_mut(*first)?;
        for &i in rest {
            entry = match entry {
                NavEntry::Directory(dir) => dir.entries.get_mut(i)?,
                NavEntry::File(_) => return None,
            };
        }
        Some(entry)
    }
}
