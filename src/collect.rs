//! Walk the configured source directories into a [`Reference`].

use crate::config::Config;
use crate::decode::decode;
use crate::extract::extract;
use crate::model::{DirDocs, FileDocs, Reference};
use crate::source::SourceTree;
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// Scan every configured directory, in configured order.
///
/// Missing directories are skipped. Files within a directory are visited in
/// sorted path order, and files without any doc block are left out.
pub fn collect(tree: &dyn SourceTree, config: &Config) -> Result<Reference> {
    let mut reference = Reference::default();

    for src_dir in &config.source_dirs {
        let dir = config.root.join(src_dir);
        if !tree.is_dir(&dir) {
            tracing::debug!("skipping missing directory {}", dir.display());
            continue;
        }

        let mut paths = tree.files(&dir, &config.extension)?;
        // Listing order is filesystem-dependent
        paths.sort();
        paths.dedup();

        let mut files = Vec::new();
        for path in paths {
            let text = decode(&tree.read(&path)?, config.invalid_utf8);
            let blocks: Vec<_> = extract(&text).collect();
            tracing::debug!("{}: {} block(s)", path.display(), blocks.len());
            if blocks.is_empty() {
                continue;
            }
            files.push(FileDocs {
                path: heading_path(src_dir, &path),
                blocks,
            });
        }

        reference.dirs.push(DirDocs {
            name: dir_name(&dir),
            files,
        });
    }

    Ok(reference)
}

/// Root-relative path of a file found directly inside `src_dir`.
///
/// Built from the configured directory rather than stripped from the listed
/// path, whose prefix depends on how the tree spells it (`./sub` vs `sub`).
fn heading_path(src_dir: &Path, file: &Path) -> PathBuf {
    let dir: PathBuf = src_dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    match file.file_name() {
        Some(name) => dir.join(name),
        None => dir.join(file),
    }
}

/// Final component of `dir`, falling back to the path itself for `.` or `/`.
fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.to_string_lossy().to_string())
}
