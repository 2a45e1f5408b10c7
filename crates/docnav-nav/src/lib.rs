//! Navigation tree building and lookup for docnav.
//!
//! This crate provides:
//! - [`build_nav`]: Groups a flat document list into a sorted [`NavEntry`] forest
//! - [`find_directory`], [`find_entry_path`], [`find_entry`], [`flatten`]: Read-only traversal
//! - [`localize`]: Overlays a locale directory onto its unlocalised counterparts
//! - [`DocsNav`]: Per-request facade that fetches from a [`DocumentSource`] and builds
//!
//! # Quick Start
//!
//! ```
//! use docnav_nav::{NavConfig, build_nav, find_entry, published};
//! use docnav_source::Document;
//!
//! let documents = vec![
//!     Document::new("guide/index.md", "Guide Overview"),
//!     Document::new("guide/01-install.md", "Installing"),
//! ];
//! let nav = build_nav(documents, &NavConfig::default(), published)?;
//!
//! assert_eq!(nav[0].title(), "Guide Overview");
//! assert_eq!(find_entry(&nav, "guide/01-install.md").map(|e| e.href()), Some("/docs/guide/install"));
//! # Ok::<(), docnav_nav::NavError>(())
//! ```
//!
//! [`DocumentSource`]: docnav_source::DocumentSource

mod builder;
mod config;
mod docs_nav;
mod entry;
mod error;
mod locale;
mod lookup;
mod path;

pub use builder::{build_nav, published};
pub use config::NavConfig;
pub use docs_nav::DocsNav;
pub use entry::{NavDirectory, NavEntry, NavFile};
pub use error::NavError;
pub use locale::localize;
pub use lookup::{find_directory, find_entry, find_entry_path, find_parent_directory, flatten};
pub use path::{id_to_slug, id_to_title, split_path};

// Re-export document types for convenience
pub use docnav_source::{Document, DocumentData, DocumentSource};
