//! CLI command implementations.

mod find;
mod flatten;
mod localize;
mod tree;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_nav::{DocsNav, NavConfig};
use docnav_source::FsSource;

use crate::error::CliError;

pub(crate) use find::FindArgs;
pub(crate) use flatten::FlattenArgs;
pub(crate) use localize::LocalizeArgs;
pub(crate) use tree::TreeArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, env = "DOCNAV_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Include draft documents.
    #[arg(long)]
    drafts: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration and bind a navigation facade to the source directory.
    pub(crate) fn open(&self) -> Result<DocsNav, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            include_drafts: self.drafts.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(
            source_dir = %config.docs_resolved.source_dir.display(),
            include_drafts = config.docs_resolved.include_drafts,
            "Loading documents"
        );

        let source = Arc::new(FsSource::new(config.docs_resolved.source_dir.clone()));
        Ok(DocsNav::new(source, nav_config_from(&config)).with_drafts(config.docs_resolved.include_drafts))
    }
}

/// Map loaded configuration onto the navigation builder's configuration.
pub(crate) fn nav_config_from(config: &Config) -> NavConfig {
    let defaults = NavConfig::default();
    NavConfig {
        locales: config.nav.locales.clone(),
        products: config.nav.products.clone(),
        slug_overrides: config
            .nav
            .slug_overrides
            .clone()
            .unwrap_or(defaults.slug_overrides),
        href_prefix: config.nav.href_prefix.clone(),
    }
}
