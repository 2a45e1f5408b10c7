//! `docnav flatten` command implementation.

use clap::Args;
use docnav_nav::{NavEntry, flatten};
use serde::Serialize;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the flatten command.
#[derive(Args)]
pub(crate) struct FlattenArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

/// One row of flattened output.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct FlatEntry<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
    href: &'a str,
    title: &'a str,
}

impl<'a> From<&'a NavEntry> for FlatEntry<'a> {
    fn from(entry: &'a NavEntry) -> Self {
        let kind = match entry {
            NavEntry::File(_) => "file",
            NavEntry::Directory(_) => "directory",
        };
        Self {
            kind,
            id: entry.id(),
            href: entry.href(),
            title: entry.title(),
        }
    }
}

impl FlattenArgs {
    /// Execute the flatten command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the tree cannot be built.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let nav = self.site.open()?.root_nav()?;
        let rows: Vec<FlatEntry<'_>> = flatten(&nav).into_iter().map(FlatEntry::from).collect();
        output.data(&serde_json::to_string_pretty(&rows)?);
        Ok(())
    }
}
