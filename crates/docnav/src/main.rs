//! docnav CLI - Documentation navigation tree builder.
//!
//! Provides commands for:
//! - `tree`: Print the full navigation forest
//! - `flatten`: Print every entry in depth-first order
//! - `find`: Print the ancestor chain of an entry
//! - `localize`: Print a product's navigation with a locale overlay

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{FindArgs, FlattenArgs, LocalizeArgs, TreeArgs};
use output::Output;

/// docnav - Documentation navigation tree builder.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full navigation tree.
    Tree(TreeArgs),
    /// Print all entries in depth-first order.
    Flatten(FlattenArgs),
    /// Print the path from the root to an entry.
    Find(FindArgs),
    /// Print a product's localised navigation.
    Localize(LocalizeArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Tree(args) => args.site.verbose,
            Self::Flatten(args) => args.site.verbose,
            Self::Find(args) => args.site.verbose,
            Self::Localize(args) => args.site.verbose,
        }
    }
}

/// Log filter: `--verbose` enables INFO, otherwise `RUST_LOG` or WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose(), rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(&output),
        Commands::Flatten(args) => args.execute(&output),
        Commands::Find(args) => args.execute(&output),
        Commands::Localize(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
