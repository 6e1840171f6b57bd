//! Optional `treedump.toml` configuration.
//!
//! ```toml
//! roots = ["src", "docs"]
//! output = "docs/structure_project.txt"
//! sort = false
//! ```
//!
//! Every key is optional. Command-line values take precedence over the file,
//! and the file over the built-in defaults.

use crate::output::OutputTarget;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings read from a config file, with built-in defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories scanned when none are given on the command line.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,

    /// Output file used when `--output` is not given. `-` means stdout.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Order entries by name.
    #[serde(default)]
    pub sort: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            output: default_output(),
            sort: false,
        }
    }
}

impl Config {
    /// Picks the config file to read.
    ///
    /// An explicit path (from `--config` or the environment) always wins.
    /// Otherwise `treedump.toml` in the current directory is used if present.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = PathBuf::from(crate::DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Loads configuration from `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, wrong value types, or unknown keys.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Roots to scan: the given ones, or the configured ones when empty.
    #[must_use]
    pub fn resolve_roots(&self, cli_roots: &[String]) -> Vec<String> {
        if cli_roots.is_empty() {
            self.roots.clone()
        } else {
            cli_roots.to_vec()
        }
    }

    /// Output target: the given one, or the configured one.
    #[must_use]
    pub fn resolve_output(&self, cli_output: Option<OutputTarget>) -> OutputTarget {
        cli_output.unwrap_or_else(|| OutputTarget::from_arg(&self.output))
    }
}

/// Built-in roots, `lib` and `docs`.
fn default_roots() -> Vec<String> {
    crate::DEFAULT_ROOTS.iter().map(ToString::to_string).collect()
}

/// Built-in output file.
fn default_output() -> PathBuf {
    PathBuf::from(crate::DEFAULT_OUTPUT)
}
