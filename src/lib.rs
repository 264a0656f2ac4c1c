//! duplicate-guard - Commit-time Duplicate File Guard
//!
//! Checksums every tracked file in a repository, then checks a list of
//! candidate files (for example the staged set) against that index and
//! against each other. Any candidate whose content already exists under a
//! different path is reported and the run fails.

pub mod candidates;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;

use std::io::{self, Write};

use anyhow::Result;

use crate::cli::Cli;
use crate::config::GuardConfig;
use crate::duplicates::DuplicateDetector;
use crate::error::ExitCode;
use crate::ignore::IgnoreFilter;
use crate::output::Reporter;
use crate::progress::Progress;
use crate::scanner::Hasher;

/// Run the application with parsed CLI arguments.
///
/// # Errors
///
/// Returns an error for fatal conditions: a missing explicit ignore file,
/// an unreadable candidate list, or an I/O failure while checksumming.
/// Duplicates are not errors; they are reflected in the returned
/// [`ExitCode`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet, cli.no_color);

    let config = GuardConfig::from_cli(&cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}

/// Execute one guarded run, writing status lines and reports to `out`.
///
/// The ignore patterns and candidate lists are loaded before any checksum
/// work starts, so configuration errors never produce partial output.
///
/// # Errors
///
/// See [`run_app`].
pub fn run<W: Write>(config: &GuardConfig, out: &mut W) -> Result<ExitCode> {
    let filter = IgnoreFilter::load(&config.ignore_file)?;
    let candidates = candidates::load_candidates(&config.candidate_lists)?;
    log::debug!(
        "{} ignore patterns, {} candidates, root {}",
        filter.len(),
        candidates.len(),
        config.root.display()
    );

    let reporter = Reporter::new(config.output);
    let detector = DuplicateDetector::with_hasher(
        &config.root,
        &filter,
        Hasher::with_chunk_size(config.chunk_size),
    );

    reporter.indexing_started(out)?;
    let progress = Progress::new(!config.show_progress);
    let mut index = detector.build_index(&progress)?;
    let checksums = index.len();
    reporter.indexing_finished(out, checksums)?;

    let evaluation = detector.evaluate(&candidates, &mut index)?;
    log::debug!(
        "Checked {} candidates ({} skipped, {} new, {} duplicates)",
        evaluation.checked,
        evaluation.skipped,
        evaluation.indexed,
        evaluation.reports.len()
    );
    reporter.evaluation(out, checksums, &evaluation)?;
    out.flush()?;

    Ok(evaluation.exit_code())
}
