//! Navigation configuration.

use std::collections::HashMap;

/// Configuration consumed by [`build_nav`](crate::build_nav) and
/// [`DocsNav`](crate::DocsNav).
///
/// Passed explicitly so a navigation build is a pure function of
/// documents and configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Recognised locale codes. A directory whose full path equals one of
    /// these is a language directory.
    pub locales: Vec<String>,
    /// Recognised product identifiers for multi-product sites.
    pub products: Vec<String>,
    /// Exact-match slug component replacements.
    pub slug_overrides: HashMap<String, String>,
    /// Prefix prepended to every slug to form an href.
    pub href_prefix: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            products: Vec::new(),
            slug_overrides: default_slug_overrides(),
            href_prefix: "/docs/".to_owned(),
        }
    }
}

/// Built-in slug overrides.
#[must_use]
pub fn default_slug_overrides() -> HashMap<String, String> {
    HashMap::from([("CONTRIBUTING".to_owned(), "contributing".to_owned())])
}

impl NavConfig {
    /// Whether `path` is a configured locale code.
    #[must_use]
    pub fn is_locale(&self, path: &str) -> bool {
        self.locales.iter().any(|l| l == path)
    }

    /// Whether `value` is a configured product identifier.
    #[must_use]
    pub fn is_product(&self, value: &str) -> bool {
        self.products.iter().any(|p| p == value)
    }

    /// Link target for a slug.
    #[must_use]
    pub fn href(&self, slug: &str) -> String {
        format!("{}{slug}", self.href_prefix)
    }
}
