//! Scanner module for repository traversal and file checksums.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: SHA-256 file hashing (streaming)

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{hash_to_hex, Hash, Hasher, DEFAULT_CHUNK_SIZE};
pub use walker::{relative_path_string, Walker};

/// A regular file discovered below the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path used to open the file (root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the repository root, `/`-separated
    pub relative_path: String,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, relative_path: String) -> Self {
        Self {
            path,
            relative_path,
        }
    }
}
