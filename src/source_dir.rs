//! Source directory enumeration
//!
//! Lists the Python files directly inside a directory and decides which of
//! them are documented. Files whose name contains a double underscore
//! (`__init__.py`, `__main__.py`, ...) are skipped.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extension of recognized source files
pub const SOURCE_EXTENSION: &str = "py";

/// File-name marker for files that are never documented
const SKIP_MARKER: &str = "__";

/// Whether a discovered file is documented or skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Document,
    Skip,
}

/// A recognized source file found in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub selection: Selection,
}

/// A directory of Python sources
pub struct SourceDir {
    root: PathBuf,
}

impl SourceDir {
    /// Open an existing directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        let metadata = std::fs::metadata(&root).map_err(|source| Error::SourceDir {
            path: root.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List recognized source files in file-name order (non-recursive)
    pub fn list_files(&self) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        for entry in walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| Error::SourceDir {
                path: self.root.clone(),
                source: source.into(),
            })?;

            if !is_file_entry(&entry) || !has_source_extension(entry.path()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let selection = if name.contains(SKIP_MARKER) {
                Selection::Skip
            } else {
                Selection::Document
            };

            files.push(SourceFile {
                path: entry.path().to_path_buf(),
                selection,
            });
        }

        Ok(files)
    }
}

/// Regular files, and symlinks that resolve to one.
///
/// A dangling link is kept so reading it fails loudly later.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        return std::fs::metadata(entry.path()).map_or(true, |m| m.is_file());
    }
    entry.file_type().is_file()
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}
