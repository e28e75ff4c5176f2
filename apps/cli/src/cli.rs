//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[command(
    name = "filegate",
    version,
    about = "Check filenames against per-filesystem naming rules",
    long_about = "Filegate checks candidate filenames against the per-filesystem naming rules \
                  of a target filesystem or OS (windows, ntfs, linux, macos, universal, ...)."
)]
pub struct Cli {
    /// Use custom configuration file instead of ./filegate.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check one or more filenames
    Check(CheckArgs),
    /// List known system identifiers and their rules
    Systems,
    /// Measure rule accuracy over a labelled corpus file
    Audit(AuditArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Target system, e.g. `ntfs` or `linux`; overrides the configured one
    #[arg(short, long, value_name = "ID")]
    pub system: Option<String>,

    /// Filenames to check
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// TOML file with one `[<system>]` table of `valid`/`invalid` names each
    #[arg(long, value_name = "FILE")]
    pub corpus: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
