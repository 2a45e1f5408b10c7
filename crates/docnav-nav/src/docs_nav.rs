//! Per-request navigation facade.
//!
//! [`DocsNav`] fetches the document collection from a [`DocumentSource`] and
//! rebuilds the forest on every call. Nothing is cached, so every caller
//! gets a private tree and the locale overlay never leaks between requests.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docnav_nav::{DocsNav, NavConfig};
//! use docnav_source::MockSource;
//!
//! let source = Arc::new(MockSource::new().with_document("guide/index.md", "Guide"));
//! let docs = DocsNav::new(source, NavConfig::default());
//!
//! let nav = docs.root_nav()?;
//! assert_eq!(nav[0].title(), "Guide");
//! # Ok::<(), docnav_nav::NavError>(())
//! ```

use std::sync::Arc;
use std::time::Instant;

use docnav_source::{Document, DocumentSource};

use crate::builder::build_nav;
use crate::config::NavConfig;
use crate::entry::{NavDirectory, NavEntry};
use crate::error::NavError;
use crate::locale::localize;
use crate::lookup::find_parent_directory;

/// Navigation builder bound to a document source and configuration.
pub struct DocsNav {
    source: Arc<dyn DocumentSource>,
    config: NavConfig,
    include_drafts: bool,
}

impl DocsNav {
    /// Create a facade that excludes drafts.
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, config: NavConfig) -> Self {
        Self {
            source,
            config,
            include_drafts: false,
        }
    }

    /// Include draft documents (development preview).
    #[must_use]
    pub fn with_drafts(mut self, include_drafts: bool) -> Self {
        self.include_drafts = include_drafts;
        self
    }

    /// Navigation configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    fn includes(&self, document: &Document) -> bool {
        self.include_drafts || !document.data.draft
    }

    /// Fetch documents and build the full forest.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the tree is inconsistent.
    pub fn root_nav(&self) -> Result<Vec<NavEntry>, NavError> {
        let start = Instant::now();
        let documents = self.source.documents()?;
        let nav = build_nav(documents, &self.config, |doc| self.includes(doc))?;

        tracing::debug!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            include_drafts = self.include_drafts,
            "Rebuilt root navigation"
        );
        Ok(nav)
    }

    /// Build the localised navigation for a product.
    ///
    /// When a product set is configured, `product` must belong to it.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownProduct`] for an unrecognised product, or
    /// any error from [`root_nav`](Self::root_nav).
    pub fn product_nav(
        &self,
        product: &str,
        locale: Option<&str>,
    ) -> Result<Vec<NavEntry>, NavError> {
        if !self.config.products.is_empty() && !self.config.is_product(product) {
            return Err(NavError::UnknownProduct(product.to_owned()));
        }
        let nav = self.root_nav()?;
        Ok(localize(&nav, product, locale))
    }

    /// Directory containing the document `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns any error from [`root_nav`](Self::root_nav).
    pub fn parent_directory_of(&self, id: &str) -> Result<Option<NavDirectory>, NavError> {
        let nav = self.root_nav()?;
        Ok(find_parent_directory(&nav, id).cloned())
    }
}
