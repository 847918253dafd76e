// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_ROOT};
use crate::core::scanner::Reporter;
use crate::models::ScanOutcome;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Keep counting when a file cannot be read and list the failures at the end
    #[arg(short = 'k', long)]
    pub keep_going: bool,
}

/// Runs a scan with the given arguments, writing the report to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * A file cannot be read (the first one, unless `keep_going` is set)
/// * With `keep_going`, any file could not be read; the total is printed first
/// * Writing to stdout fails
pub fn run(args: Args) -> Result<()> {
    let config = Config::from(&args);
    let mut reporter = Reporter::new(io::stdout().lock(), config.policy);

    let outcome = reporter
        .scan(&config.root)
        .with_context(|| format!("Failed to count lines in directory: {}", config.root.display()))?;

    finish(&outcome, &mut io::stderr().lock())
}

/// Lists files skipped under `--keep-going` on `err` and turns them into an
/// error, so the process exits non-zero after the total has been printed.
///
/// # Errors
///
/// Returns an error if the scan recorded any failures, or if writing to `err`
/// fails.
pub fn finish<E: Write>(outcome: &ScanOutcome, err: &mut E) -> Result<()> {
    if let ScanOutcome::Completed(summary) = outcome {
        if summary.has_failures() {
            for failure in &summary.failures {
                writeln!(err, "skipped {}: {}", failure.path.display(), failure.reason)?;
            }
            bail!("{} file(s) could not be read", summary.failures.len());
        }
    }

    Ok(())
}
