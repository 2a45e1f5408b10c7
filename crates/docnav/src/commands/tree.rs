//! `docnav tree` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the tree cannot be built.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.data(&self.render()?);
        Ok(())
    }

    /// Build the forest and serialize it as pretty JSON.
    fn render(&self) -> Result<String, CliError> {
        let nav = self.site.open()?.root_nav()?;
        Ok(serde_json::to_string_pretty(&nav)?)
    }
}
