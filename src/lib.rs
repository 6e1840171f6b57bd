#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)] // Depth-based indentation widths cannot overflow

//! # Treedump - Directory Structure Listings
//!
//! Treedump walks a set of directory trees and writes an indented, plain-text
//! listing of their contents to a file or standard output.
//!
//! ## Architecture
//!
//! - [`render`]: The recursive directory-to-text renderer
//! - [`output`]: Output sinks (file or stdout) and console messages
//! - [`config`]: Optional TOML configuration supplying defaults
//! - [`cli`]: Command-line argument definitions
//! - [`utils`]: Path helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use treedump::output::{OutputTarget, Sink};
//!
//! # fn main() -> anyhow::Result<()> {
//! let target = OutputTarget::File("docs/structure_project.txt".into());
//! let mut sink = Sink::open(&target)?;
//! treedump::render::render(&["lib".to_string(), "docs".to_string()], &mut sink)?;
//! sink.finish()?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration file parsing and defaults.
pub mod config;

/// Output sinks and console messages.
pub mod output;

/// Directory tree rendering.
pub mod render;

/// Utility functions and helpers.
pub mod utils;

/// Current version of the treedump binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directories scanned when none are given.
pub const DEFAULT_ROOTS: [&str; 2] = ["lib", "docs"];

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "docs/structure_project.txt";

/// Config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "treedump.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "TREEDUMP_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "TREEDUMP_LOG";
