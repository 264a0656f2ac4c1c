//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - The checksum index shared by both phases of a run
//! - Repository indexing and candidate evaluation

pub mod detector;
pub mod index;

pub use detector::{DuplicateDetector, DuplicateReport, Evaluation};
pub use index::ChecksumIndex;
