//! Data model for the generated reference — format-agnostic.

use std::path::PathBuf;

/// One `///` run plus the signature line found after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Marker-stripped lines joined by `\n`
    pub doc: String,
    /// Trimmed signature line, empty when none follows
    pub signature: String,
}

/// A source file that produced at least one block.
#[derive(Debug, PartialEq, Eq)]
pub struct FileDocs {
    /// Relative to the repository root
    pub path: PathBuf,
    pub blocks: Vec<DocBlock>,
}

/// One configured source directory that exists.
#[derive(Debug, PartialEq, Eq)]
pub struct DirDocs {
    pub name: String,
    pub files: Vec<FileDocs>,
}

/// Complete document, directories in configured order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reference {
    pub dirs: Vec<DirDocs>,
}

impl Reference {
    /// Total number of blocks across all files.
    pub fn block_count(&self) -> usize {
        self.dirs
            .iter()
            .flat_map(|d| &d.files)
            .map(|f| f.blocks.len())
            .sum()
    }
}
