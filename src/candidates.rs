//! Candidate-list loading.
//!
//! Each candidate-list document is a JSON array of relative file paths,
//! typically produced by a pre-commit hook from the staged file set.
//! Documents are concatenated in argument order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::GuardError;

/// Load and concatenate candidate paths from every document in `paths`.
///
/// Missing documents are skipped. `null` entries are dropped.
///
/// # Errors
///
/// Returns [`GuardError::CandidateList`] if a document cannot be read or is
/// not a JSON array of strings.
pub fn load_candidates<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, GuardError> {
    let mut candidates = Vec::new();
    for path in paths {
        candidates.extend(load_document(path.as_ref())?);
    }
    Ok(candidates)
}

fn load_document(path: &Path) -> Result<Vec<String>, GuardError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Candidate list {} not found, skipping", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(list_error(path, e.to_string())),
    };

    let entries: Vec<Option<String>> =
        serde_json::from_str(&content).map_err(|e| list_error(path, e.to_string()))?;
    log::debug!(
        "Loaded {} candidates from {}",
        entries.len(),
        path.display()
    );
    Ok(entries.into_iter().flatten().collect())
}

fn list_error(path: &Path, reason: String) -> GuardError {
    GuardError::CandidateList {
        path: PathBuf::from(path),
        reason,
    }
}
