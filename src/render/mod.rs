//! Directory tree rendering.
//!
//! Each root is rendered as a banner followed by a depth-first, pre-order
//! listing: a directory's own line, then its files, then its subdirectories.
//!
//! ```text
//! ==================================================
//! Files in lib:
//! ==================================================
//! lib/
//!     main.rs
//!     parser/
//!         mod.rs
//! ```
//!
//! Entry order is whatever the filesystem enumeration returns, which is
//! platform dependent. Set [`RenderOptions::sort`] for name order.

use crate::utils::paths::{entry_name, indent};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{Level, debug, span, trace};
use walkdir::WalkDir;

/// Width of the `=` rule framing each root's header.
pub const BANNER_WIDTH: usize = 50;

/// Knobs for [`render_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Order files and subdirectories by name instead of enumeration order.
    pub sort: bool,
}

/// Renders every root to `sink` in input order, using filesystem order.
///
/// # Errors
///
/// Returns an error if a directory below a root cannot be read or if writing
/// to the sink fails. Missing roots are reported inline, not as errors.
pub fn render<P, W>(roots: &[P], sink: &mut W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    render_with(roots, sink, &RenderOptions::default())
}

/// Renders every root to `sink` in input order.
///
/// # Errors
///
/// Returns an error if a directory below a root cannot be read or if writing
/// to the sink fails. Missing roots are reported inline, not as errors.
pub fn render_with<P, W>(roots: &[P], sink: &mut W, options: &RenderOptions) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    for root in roots {
        let root = root.as_ref();
        render_root(root, sink, options)
            .with_context(|| format!("Failed to list {}", root.display()))?;
    }
    Ok(())
}

/// Renders one root: the not-found line, or the banner and the tree.
fn render_root<W>(root: &Path, sink: &mut W, options: &RenderOptions) -> Result<()>
where
    W: Write + ?Sized,
{
    let _span = span!(Level::DEBUG, "render_root", root = %root.display()).entered();

    if !root.is_dir() {
        debug!("Skipping root that is not a directory");
        writeln!(sink, "Directory not found: {}", root.display())?;
        return Ok(());
    }

    write_banner(root, sink)?;

    let mut walker = WalkDir::new(root).follow_links(false);
    if options.sort {
        walker = walker.sort_by_file_name();
    }

    let mut directories = 0usize;
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        // A symlinked root is still walked; only links below it are skipped
        if entry.depth() > 0 && !entry.file_type().is_dir() {
            continue;
        }

        let level = entry.depth();
        writeln!(sink, "{}{}/", indent(level), entry_name(entry.path()))?;

        let files = list_files(entry.path(), options.sort)?;
        trace!(dir = %entry.path().display(), level, files = files.len(), "Visited directory");

        let file_indent = indent(level + 1);
        for name in &files {
            writeln!(sink, "{file_indent}{}", name.to_string_lossy())?;
        }
        directories += 1;
    }

    debug!(directories, "Rendered root");
    Ok(())
}

/// Writes the three-line header for `root`.
fn write_banner<W: Write + ?Sized>(root: &Path, sink: &mut W) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(sink, "{rule}")?;
    writeln!(sink, "Files in {}:", root.display())?;
    writeln!(sink, "{rule}")?;
    Ok(())
}

/// Names of the non-directory entries directly inside `dir`.
///
/// Symlinks are classified by their target, so a link to a directory is left
/// out here and, since the walk does not follow links, never listed at all.
fn list_files(dir: &Path, sort: bool) -> Result<Vec<OsString>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if entry.path().is_dir() {
            continue;
        }
        files.push(entry.file_name());
    }

    if sort {
        files.sort();
    }
    Ok(files)
}
