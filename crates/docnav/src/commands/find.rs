//! `docnav find` command implementation.

use clap::Args;
use docnav_nav::find_entry_path;

use super::SiteArgs;
use super::flatten::FlatEntry;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the find command.
#[derive(Args)]
pub(crate) struct FindArgs {
    /// Entry id (e.g. `00-guide/01-install.md` or `00-guide`).
    id: String,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl FindArgs {
    /// Execute the find command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotFound`] if no entry has the id.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.data(&self.render()?);
        Ok(())
    }

    /// Serialize the root-to-entry chain as pretty JSON.
    fn render(&self) -> Result<String, CliError> {
        let nav = self.site.open()?.root_nav()?;
        let path = find_entry_path(&nav, &self.id)
            .ok_or_else(|| CliError::NotFound(format!("No navigation entry with id {}", self.id)))?;

        let rows: Vec<FlatEntry<'_>> = path.into_iter().map(FlatEntry::from).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}
