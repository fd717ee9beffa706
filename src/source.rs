//! Access to the files being documented.
//!
//! [`SourceTree`] keeps the pipeline independent of the real filesystem so
//! the collector can be driven from memory in tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub trait SourceTree {
    fn is_dir(&self, dir: &Path) -> bool;

    /// Files directly inside `dir` named `*.<extension>`, in no particular order.
    fn files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// The real filesystem.
pub struct FsTree;

impl SourceTree for FsTree {
    fn is_dir(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            glob::Pattern::escape(extension)
        );
        let mut files = Vec::new();
        for entry in glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("skipping unreadable entry: {}", e),
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
