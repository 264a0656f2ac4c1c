//! Run configuration.
//!
//! [`GuardConfig`] is the resolved form of the command line: everything the
//! run coordinator needs, with no clap types left in it.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::scanner::DEFAULT_CHUNK_SIZE;

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Repository root to index
    pub root: PathBuf,
    /// Ignore-pattern file, exactly as supplied
    pub ignore_file: PathBuf,
    /// Candidate-list documents, in argument order
    pub candidate_lists: Vec<PathBuf>,
    /// How results are written to stdout
    pub output: OutputFormat,
    /// Read buffer size for checksums
    pub chunk_size: usize,
    /// Whether the progress spinner is shown
    pub show_progress: bool,
}

impl GuardConfig {
    /// Resolve a configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            ignore_file: cli.ignore_file.clone(),
            candidate_lists: cli.candidate_lists.clone(),
            output: cli.output,
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: !cli.quiet && cli.output == OutputFormat::Text,
        }
    }
}
