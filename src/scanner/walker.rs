//! Repository walker built on walkdir.
//!
//! # Overview
//!
//! [`Walker`] yields every regular file below the repository root together
//! with its root-relative path. Children are visited in file-name order so
//! that repeated runs over the same tree see files in the same order.
//!
//! Directory symlinks are not descended into. A symlink that points at a
//! regular file is yielded (its target's bytes are what get hashed); broken
//! links, sockets, fifos and other special files are skipped.
//!
//! A subdirectory that cannot be listed is logged and skipped, so one
//! unreadable directory does not hide the rest of the tree. Failing to open
//! the root itself is still an error.
//!
//! # Example
//!
//! ```no_run
//! use duplicate_guard::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."));
//! for entry in walker.walk() {
//!     let file = entry.unwrap();
//!     println!("{}", file.relative_path);
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileEntry;
use crate::error::GuardError;

/// Sequential directory walker for index building.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker rooted at `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Walk the tree, yielding regular files in deterministic order.
    ///
    /// Unreadable subdirectories are skipped with a warning. Any other walk
    /// failure, including a missing or unreadable root, is yielded as
    /// [`GuardError::Walk`].
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, GuardError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        return None;
                    }

                    let path = entry.into_path();
                    if file_type.is_symlink() && !points_to_file(&path) {
                        log::trace!("Skipping symlink without file target: {}", path.display());
                        return None;
                    }
                    if !file_type.is_file() && !file_type.is_symlink() {
                        log::trace!("Skipping special file: {}", path.display());
                        return None;
                    }

                    let relative_path = relative_path_string(&self.root, &path);
                    Some(Ok(FileEntry::new(path, relative_path)))
                }
                Err(e) if e.depth() > 0 && e.io_error().is_some() => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), std::borrow::ToOwned::to_owned);
                    log::warn!("Walker error for {}: {}", path.display(), e);
                    Some(Err(GuardError::Walk { path, source: e }))
                }
            })
    }
}

fn points_to_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

/// Express `path` relative to `root`, with `/` separators on every platform.
#[must_use]
pub fn relative_path_string(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let path_str = relative.to_string_lossy();
    if cfg!(windows) {
        path_str.replace('\\', "/")
    } else {
        path_str.into_owned()
    }
}
