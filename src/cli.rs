//! Command-line interface definitions for treedump.
//!
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap doc comments,
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::output::{OutputTarget, Verbosity};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for treedump.
#[derive(Parser, Debug)]
#[command(
    name = "treedump",
    version = crate::VERSION,
    about = "List files in directory trees",
    long_about = "Walks each directory recursively and writes an indented listing of its contents to a file or stdout"
)]
pub struct Cli {
    /// Directories to scan (default: lib and docs)
    pub directories: Vec<String>,

    /// Output file path, or '-' for stdout (default: docs/structure_project.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Order entries by name instead of filesystem order
    #[arg(long)]
    pub sort: bool,

    /// Configuration file (default: ./treedump.toml)
    #[arg(short, long, env = crate::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Verbosity requested by the flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Output target named on the command line, if any.
    #[must_use]
    pub fn output_target(&self) -> Option<OutputTarget> {
        self.output.as_deref().map(OutputTarget::from_arg)
    }
}
