//! Structured error handling and exit codes.

use std::path::PathBuf;

use serde::Serialize;

/// Exit codes for the duplicate guard.
///
/// - 0: Clean (no duplicates among the candidates)
/// - 1: Duplicates found (at least one candidate duplicates another file)
/// - 2: Configuration error (explicit ignore file missing, bad pattern)
/// - 3: General error (I/O failure, unreadable candidate list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Clean: every candidate was unique.
    Clean = 0,
    /// Duplicates found: one or more candidates were reported.
    DuplicatesFound = 1,
    /// Configuration error: setup failed before any checksum work.
    ConfigError = 2,
    /// General error: an unexpected failure during the run.
    GeneralError = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Clean => "DG000",
            Self::DuplicatesFound => "DG001",
            Self::ConfigError => "DG002",
            Self::GeneralError => "DG003",
        }
    }

    /// Pick the exit code for a fatal error that ended the run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GuardError>() {
            Some(e) if e.is_config_error() => Self::ConfigError,
            _ => Self::GeneralError,
        }
    }
}

/// Errors raised while loading configuration or checksumming files.
#[derive(thiserror::Error, Debug)]
pub enum GuardError {
    /// An ignore file was named explicitly but does not exist.
    #[error("The specified ignore file '{}' does not exist.", .0.display())]
    IgnoreFileNotFound(PathBuf),

    /// The ignore file exists but could not be read.
    #[error("Failed to read ignore file {path}: {source}")]
    IgnoreFileRead {
        /// Path of the ignore file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line of the ignore file could not be compiled into a matcher.
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern as written
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A candidate list could not be read or parsed.
    #[error("Invalid candidate list {path}: {reason}")]
    CandidateList {
        /// Path of the candidate list document
        path: PathBuf,
        /// Why the document was rejected
        reason: String,
    },

    /// The repository walk failed.
    #[error("Failed to walk {path}: {source}")]
    Walk {
        /// Path where the walk failed
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read while computing its checksum.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GuardError {
    /// Whether this error is a setup problem rather than a runtime failure.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::IgnoreFileNotFound(_) | Self::InvalidPattern { .. }
        )
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DG002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
