//! `docnav localize` command implementation.

use clap::Args;
use docnav_nav::{DocsNav, NavConfig};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the localize command.
#[derive(Args)]
pub(crate) struct LocalizeArgs {
    /// Product whose subtree to show.
    product: String,

    /// Locale to overlay (e.g. `ja`).
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl LocalizeArgs {
    /// Execute the localize command.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the tree cannot be built.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let docs = self.site.open()?;
        if let Some(warning) = self.locale_warning(docs.config()) {
            output.warning(&warning);
        }
        output.data(&self.render(&docs)?);
        Ok(())
    }

    /// Warning for a locale missing from the configured locale list.
    fn locale_warning(&self, config: &NavConfig) -> Option<String> {
        let locale = self.locale.as_deref()?;
        (!config.is_locale(locale))
            .then(|| format!("Locale {locale} is not configured; its directory will not be removed"))
    }

    /// Serialize the localised product forest as pretty JSON.
    fn render(&self, docs: &DocsNav) -> Result<String, CliError> {
        let nav = docs.product_nav(&self.product, self.locale.as_deref())?;
        Ok(serde_json::to_string_pretty(&nav)?)
    }
}
