//! Checksum index: content digest to the first path that produced it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::scanner::Hash;

/// Mapping from content checksum to the first relative path observed with it.
///
/// Entries are never replaced: once a checksum is claimed by a path, later
/// paths with the same content can only be reported against it.
#[derive(Debug, Clone, Default)]
pub struct ChecksumIndex {
    entries: HashMap<Hash, String>,
}

impl ChecksumIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` for `hash` unless the checksum is already claimed.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, hash: Hash, path: &str) -> bool {
        match self.entries.entry(hash) {
            Entry::Occupied(existing) => {
                log::trace!(
                    "{} already indexed as {}, keeping first",
                    path,
                    existing.get()
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(path.to_string());
                true
            }
        }
    }

    /// Path that first claimed `hash`, if any.
    #[must_use]
    pub fn get(&self, hash: &Hash) -> Option<&str> {
        self.entries.get(hash).map(String::as_str)
    }

    /// Number of distinct checksums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
