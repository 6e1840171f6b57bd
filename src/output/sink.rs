use crate::utils::paths::ensure_parent_dirs;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a rendered listing is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file, created (with its parent directories) or truncated on open.
    File(PathBuf),
    /// The process's standard output.
    Stdout,
}

impl OutputTarget {
    /// Interprets a command-line value, where `-` means stdout.
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// An open output destination, held for the duration of one run.
///
/// Buffered file output is flushed when the sink is dropped, so whatever was
/// rendered before an error still reaches the file. Call [`Sink::finish`] on
/// the success path to observe flush errors.
pub enum Sink {
    /// Buffered writer over the output file.
    File {
        /// Path of the open file, kept for error context.
        path: PathBuf,
        /// Buffered handle (64KB buffer).
        writer: BufWriter<File>,
    },
    /// Locked stdout.
    Stdout {
        /// Lock held for the whole run.
        handle: StdoutLock<'static>,
        /// Cleared once the reader on the other end of a pipe goes away.
        alive: bool,
    },
}

impl Sink {
    /// Opens the target, creating missing parent directories for files.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories or the file cannot be created.
    pub fn open(target: &OutputTarget) -> Result<Self> {
        match target {
            OutputTarget::File(path) => {
                ensure_parent_dirs(path)?;
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                debug!(path = %path.display(), "Opened output file");
                Ok(Self::File {
                    path: path.clone(),
                    writer: BufWriter::with_capacity(64 * 1024, file),
                })
            }
            OutputTarget::Stdout => {
                debug!("Writing to stdout");
                Ok(Self::Stdout {
                    handle: io::stdout().lock(),
                    alive: true,
                })
            }
        }
    }

    /// Flushes everything written so far and closes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<()> {
        let flushed = self.flush();
        match &self {
            Self::File { path, .. } => flushed
                .with_context(|| format!("Failed to write output file: {}", path.display())),
            Self::Stdout { .. } => flushed.context("Failed to flush stdout"),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File { writer, .. } => writer.write(buf),
            Self::Stdout { handle, alive } => {
                if !*alive {
                    return Ok(buf.len());
                }
                match handle.write(buf) {
                    Ok(n) => Ok(n),
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                        debug!("Broken pipe on stdout, discarding remaining output");
                        *alive = false;
                        Ok(buf.len())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File { writer, .. } => writer.flush(),
            Self::Stdout { handle, alive } => {
                if !*alive {
                    return Ok(());
                }
                match handle.flush() {
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                        *alive = false;
                        Ok(())
                    }
                    other => other,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg_dash_is_stdout() {
        assert_eq!(OutputTarget::from_arg(Path::new("-")), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg(Path::new("a/b.txt")),
            OutputTarget::File(PathBuf::from("a/b.txt"))
        );
    }

    #[test]
    fn test_open_creates_parent_dirs() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("deep/nested/out.txt");

        let mut sink = Sink::open(&OutputTarget::File(path.clone()))?;
        writeln!(sink, "hello")?;
        sink.finish()?;

        assert_eq!(fs::read_to_string(&path)?, "hello\n");
        Ok(())
    }

    #[test]
    fn test_open_truncates_existing_file() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("out.txt");
        fs::write(&path, "stale content that is long\n")?;

        let mut sink = Sink::open(&OutputTarget::File(path.clone()))?;
        writeln!(sink, "new")?;
        sink.finish()?;

        assert_eq!(fs::read_to_string(&path)?, "new\n");
        Ok(())
    }

    #[test]
    fn test_drop_flushes_buffered_output() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("out.txt");

        {
            let mut sink = Sink::open(&OutputTarget::File(path.clone()))?;
            writeln!(sink, "partial")?;
        }

        assert_eq!(fs::read_to_string(&path)?, "partial\n");
        Ok(())
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() -> Result<()> {
        let temp = TempDir::new()?;
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "")?;

        let result = Sink::open(&OutputTarget::File(blocker.join("out.txt")));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputTarget::Stdout.to_string(), "<stdout>");
        assert_eq!(
            OutputTarget::File(PathBuf::from("docs/x.txt")).to_string(),
            "docs/x.txt"
        );
    }
}
