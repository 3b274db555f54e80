//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Folio - builds problem statements into versioned packages
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a statement and publish it to the repository
    Build(BuildArgs),

    /// List the versions of a statement without building it
    Inspect(InspectArgs),

    /// Show a published statement
    Show(ShowArgs),

    /// List supported statement formats
    Formats,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Statement directory
    pub location: PathBuf,

    /// Package entry to publish the statement as (e.g. problems/a/statement)
    #[arg(short, long)]
    pub package: String,

    /// Package repository directory
    #[arg(long, env = "FOLIO_REPOSITORY")]
    pub repo: Option<PathBuf>,

    /// Build versions in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Statement directory
    pub location: PathBuf,

    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Package entry of a published statement
    pub package: String,

    /// Package repository directory
    #[arg(long, env = "FOLIO_REPOSITORY")]
    pub repo: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
