use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch project directory populated with a small tree
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    /// Create an empty scratch directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the temporary directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an empty file (and its parents) relative to the scratch directory
    pub fn file(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, "")?;
        Ok(path)
    }

    /// Create a directory (and its parents) relative to the scratch directory
    pub fn dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

/// The `=` rule framing each root's header
pub fn rule() -> String {
    "=".repeat(50)
}
