//! CLI argument definitions for the colltools binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Structural operations over JSON documents
#[derive(Parser, Debug)]
#[command(name = "colltools")]
#[command(about = "colltools: compare, merge and inspect JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "COLLTOOLS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge documents into the first one and print the result
    Merge(MergeArgs),
    /// Check two documents for deep structural equality
    Equal(EqualArgs),
    /// List the top-level keys of a document
    Keys(DocumentArgs),
    /// Check whether a document is empty
    Empty(DocumentArgs),
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Merge nested objects key by key instead of replacing them
    #[arg(short, long)]
    pub deep: bool,

    /// Destination document followed by the sources, applied left to right
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the equal command
#[derive(clap::Args, Debug)]
pub struct EqualArgs {
    /// First document
    pub left: PathBuf,

    /// Second document
    pub right: PathBuf,
}

/// Arguments for commands that take a single document
#[derive(clap::Args, Debug)]
pub struct DocumentArgs {
    /// Path to a JSON document
    pub file: PathBuf,
}
