// ABOUTME: CLI argument parsing and command routing for aristo-setup
//
// Provides command-line interface for:
// - Running the setup wizard (tui, default)
// - Printing the option catalogs (catalog)
// - Showing the effective configuration (config)

pub mod catalog;
pub mod config;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// First-run setup wizard for the Aristo music server
#[derive(Parser)]
#[command(name = "aristo-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the admin password in the completion output
    #[arg(long, global = true)]
    pub show_password: bool,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the setup wizard (default if no command given)
    Tui,

    /// Print one of the option catalogs
    Catalog(CatalogArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments for the catalog command
#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Catalog to print
    #[arg(value_enum)]
    pub kind: CatalogKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Languages,
    Regions,
    /// Demonstration folder listing shown in library cards
    Paths,
}
