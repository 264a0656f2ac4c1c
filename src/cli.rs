//! Command-line interface definitions for duplicate-guard.
//!
//! # Example
//!
//! ```bash
//! # Check staged files using the conventional ignore file
//! duplicate-guard ./duplicate_guard.ignore staged.json
//!
//! # Several candidate lists, JSON report, verbose logging
//! duplicate-guard -v --output json ./duplicate_guard.ignore added.json modified.json
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Reject files that are byte-identical to tracked files or to each other.
///
/// Every non-ignored file under the repository root is checksummed, then each
/// candidate listed in the JSON documents is compared against that index and
/// against the candidates before it.
#[derive(Debug, Parser)]
#[command(name = "duplicate-guard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ignore-pattern file (one shell glob per line, `#` comments)
    ///
    /// A missing file is fatal unless it is the conventional
    /// `./duplicate_guard.ignore`.
    #[arg(value_name = "IGNORE_FILE")]
    pub ignore_file: PathBuf,

    /// JSON documents, each an array of candidate file paths
    #[arg(value_name = "CANDIDATE_LIST")]
    pub candidate_lists: Vec<PathBuf>,

    /// Repository root to index
    #[arg(long, value_name = "DIR", default_value = ".", env = "DUPLICATE_GUARD_ROOT")]
    pub root: PathBuf,

    /// Output format for status lines and duplicate reports
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for run results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain status and report lines
    Text,
    /// A single JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
