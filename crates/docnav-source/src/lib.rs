//! Document source abstraction for docnav.
//!
//! This crate provides the [`DocumentSource`] trait that feeds flat document
//! records into the navigation builder, keeping tree construction free of I/O.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Document`] and [`DocumentData`], the records every source yields
//! - [`FsSource`] for a directory of markdown files with YAML front-matter
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use docnav_source::{DocumentSource, FsSource};
//!
//! let source = FsSource::new("docs");
//! for doc in source.documents()? {
//!     println!("{}: {}", doc.id, doc.data.title);
//! }
//! ```

mod document;
mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;

pub use document::{Document, DocumentData, DocumentSource, SourceError};
pub use fs::FsSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
