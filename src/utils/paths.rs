use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Number of spaces per depth level in a rendered listing.
pub const INDENT_WIDTH: usize = 4;

/// Ensures parent directories exist for a given path
///
/// # Errors
///
/// Returns an error if the parent directories cannot be created
pub fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create parent directories for {}", path.display())
        })?;
    }
    Ok(())
}

/// Name shown for a path in a listing.
///
/// This is the final component, or the whole path when there is none
/// (`.`, `..`, `/`). Non-UTF-8 names are converted lossily.
#[must_use]
pub fn entry_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
}

/// Leading whitespace for an entry at `level`.
#[must_use]
pub fn indent(level: usize) -> String {
    " ".repeat(INDENT_WIDTH * level)
}
