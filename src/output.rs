//! Output formatters for run results.
//!
//! Text output mirrors what a pre-commit hook prints: a status line before
//! and after indexing, then one line per duplicate. JSON output collects the
//! same information into one document.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "checksums": 42,
//!   "duplicates": [
//!     { "path": "dup.txt", "original": "keep.txt", "checksum": "2cf24d..." }
//!   ],
//!   "exit_code": 1
//! }
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::duplicates::{DuplicateReport, Evaluation};

/// Writes status lines and duplicate reports in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
}

/// JSON document emitted at the end of a run.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Distinct checksums after indexing the repository
    pub checksums: usize,
    /// Duplicates in candidate order
    pub duplicates: &'a [DuplicateReport],
    /// Process exit code for the run
    pub exit_code: i32,
}

impl Reporter {
    /// Create a reporter for `format`.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Announce the start of indexing.
    pub fn indexing_started<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "Calculating checksums for all repository files..."),
            OutputFormat::Json => Ok(()),
        }
    }

    /// Report the number of distinct checksums found.
    pub fn indexing_finished<W: Write>(&self, out: &mut W, checksums: usize) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "Done, {checksums} checksums"),
            OutputFormat::Json => Ok(()),
        }
    }

    /// Report the evaluation result.
    pub fn evaluation<W: Write>(
        &self,
        out: &mut W,
        checksums: usize,
        evaluation: &Evaluation,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for report in &evaluation.reports {
                    writeln!(out, "{report}")?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                let doc = JsonOutput {
                    checksums,
                    duplicates: &evaluation.reports,
                    exit_code: evaluation.exit_code().as_i32(),
                };
                serde_json::to_writer_pretty(&mut *out, &doc).map_err(io::Error::from)?;
                writeln!(out)
            }
        }
    }
}
