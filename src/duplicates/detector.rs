//! Duplicate detector: repository indexing and candidate evaluation.
//!
//! # Overview
//!
//! Detection runs in two phases over a single [`ChecksumIndex`]:
//! 1. **Index**: checksum every non-ignored regular file under the root,
//!    keeping the first path seen for each checksum.
//! 2. **Evaluate**: checksum each candidate in order. Unseen content is added
//!    to the index, so a later candidate with the same bytes is reported
//!    against the earlier candidate. Content already claimed by a different
//!    path is reported as a duplicate.
//!
//! Equal SHA-256 digests are taken to mean equal content; files are never
//! compared byte by byte.
//!
//! # Example
//!
//! ```no_run
//! use duplicate_guard::duplicates::DuplicateDetector;
//! use duplicate_guard::ignore::IgnoreFilter;
//! use duplicate_guard::progress::NoProgress;
//! use std::path::Path;
//!
//! let filter = IgnoreFilter::builtin().unwrap();
//! let detector = DuplicateDetector::new(Path::new("."), &filter);
//!
//! let mut index = detector.build_index(&NoProgress).unwrap();
//! let candidates = vec!["new_file.txt".to_string()];
//! let evaluation = detector.evaluate(&candidates, &mut index).unwrap();
//!
//! for report in &evaluation.reports {
//!     println!("{report}");
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::ChecksumIndex;
use crate::error::{ExitCode, GuardError};
use crate::ignore::IgnoreFilter;
use crate::progress::ProgressCallback;
use crate::scanner::{hash_to_hex, Hasher, Walker};

/// A candidate whose content matches a different, already indexed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    /// Candidate path as supplied
    pub path: String,
    /// Path that first claimed the same checksum
    pub original: String,
    /// Shared SHA-256 checksum (hex)
    pub checksum: String,
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: '{}' is a duplicate of '{}'",
            self.path, self.original
        )
    }
}

/// Outcome of evaluating a candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Duplicates in candidate order
    pub reports: Vec<DuplicateReport>,
    /// Candidates that were checksummed
    pub checked: usize,
    /// Candidates skipped (empty, missing, not a regular file, or ignored)
    pub skipped: usize,
    /// Candidates whose content was new and got added to the index
    pub indexed: usize,
}

impl Evaluation {
    /// Whether any duplicate was reported.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.reports.is_empty()
    }

    /// Aggregate exit status for the run.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.has_duplicates() {
            ExitCode::DuplicatesFound
        } else {
            ExitCode::Clean
        }
    }
}

/// Checksum-based duplicate detector for one repository root.
#[derive(Debug)]
pub struct DuplicateDetector<'a> {
    root: PathBuf,
    filter: &'a IgnoreFilter,
    hasher: Hasher,
}

impl<'a> DuplicateDetector<'a> {
    /// Create a detector with the default hasher.
    #[must_use]
    pub fn new(root: &Path, filter: &'a IgnoreFilter) -> Self {
        Self::with_hasher(root, filter, Hasher::new())
    }

    /// Create a detector with a custom hasher.
    #[must_use]
    pub fn with_hasher(root: &Path, filter: &'a IgnoreFilter, hasher: Hasher) -> Self {
        Self {
            root: root.to_path_buf(),
            filter,
            hasher,
        }
    }

    /// Checksum every non-ignored file under the root.
    ///
    /// # Errors
    ///
    /// A root that cannot be walked, or a file that cannot be read, is fatal
    /// and returned as-is. Unreadable subdirectories are skipped by the walker.
    pub fn build_index(
        &self,
        progress: &dyn ProgressCallback,
    ) -> Result<ChecksumIndex, GuardError> {
        let mut index = ChecksumIndex::new();
        let mut hashed = 0usize;

        progress.on_phase_start("Indexing repository");
        for entry in Walker::new(&self.root).walk() {
            let entry = entry?;
            if self.filter.should_ignore(&entry.relative_path) {
                continue;
            }

            let hash = self.hasher.full_hash(&entry.path)?;
            hashed += 1;
            progress.on_progress(hashed, &entry.relative_path);
            index.insert_if_absent(hash, &entry.relative_path);
        }
        progress.on_phase_end("Indexing repository");

        log::debug!(
            "Indexed {} files into {} distinct checksums",
            hashed,
            index.len()
        );
        Ok(index)
    }

    /// Evaluate candidates in order against `index`, growing it as new
    /// content is seen.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Io`] if a candidate exists but cannot be read.
    pub fn evaluate(
        &self,
        candidates: &[String],
        index: &mut ChecksumIndex,
    ) -> Result<Evaluation, GuardError> {
        let mut evaluation = Evaluation::default();

        for candidate in candidates {
            if candidate.is_empty() {
                evaluation.skipped += 1;
                continue;
            }

            let path = self.root.join(candidate);
            if !is_regular_file(&path) {
                log::debug!("Skipping candidate that is not a regular file: {candidate}");
                evaluation.skipped += 1;
                continue;
            }

            if self.filter.should_ignore(candidate) {
                log::debug!("Skipping ignored candidate: {candidate}");
                evaluation.skipped += 1;
                continue;
            }

            let hash = self.hasher.full_hash(&path)?;
            evaluation.checked += 1;

            match index.get(&hash).map(str::to_owned) {
                None => {
                    index.insert_if_absent(hash, candidate);
                    evaluation.indexed += 1;
                }
                Some(existing) if existing == *candidate => {
                    log::trace!("Candidate {candidate} is already indexed as itself");
                }
                Some(existing) => {
                    log::debug!("Candidate {candidate} duplicates {existing}");
                    evaluation.reports.push(DuplicateReport {
                        path: candidate.clone(),
                        original: existing,
                        checksum: hash_to_hex(&hash),
                    });
                }
            }
        }

        Ok(evaluation)
    }
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}
