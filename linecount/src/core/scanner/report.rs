// src/core/scanner/report.rs
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

use crate::config::ErrorPolicy;
use crate::core::counter::count_lines;
use crate::core::scanner::walk::{readable, walker};
use crate::error::ScanError;
use crate::models::{FileFailure, FileLineCount, ScanOutcome, ScanSummary};
use crate::utils::is_regular_file;

type Counter = fn(&Path) -> Result<u64, ScanError>;

/// Walks a directory tree and streams a line count report to `out`.
///
/// Each regular file produces `<name>: <N> lines` as soon as it is counted,
/// followed at the end by a blank line and the total for the root.
pub struct Reporter<W> {
    out: W,
    policy: ErrorPolicy,
    counter: Counter,
}

impl<W: Write> Reporter<W> {
    #[inline]
    pub fn new(out: W, policy: ErrorPolicy) -> Self {
        Self {
            out,
            policy,
            counter: count_lines,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_counter(mut self, counter: Counter) -> Self {
        self.counter = counter;
        self
    }

    /// Scans `root` and writes the report.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory to scan, printed verbatim in the report
    ///
    /// # Returns
    ///
    /// * `Ok(ScanOutcome::MissingRoot)` - The root does not exist
    /// * `Ok(ScanOutcome::Completed(summary))` - Every file was visited
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * A file cannot be read and the policy is [`ErrorPolicy::FailFast`].
    ///   Lines already written stay written; the total is not.
    /// * Writing to `out` fails
    pub fn scan(&mut self, root: &Path) -> Result<ScanOutcome, ScanError> {
        if !root.exists() {
            writeln!(self.out, "The folder '{}' does not exist.", root.display())?;
            return Ok(ScanOutcome::MissingRoot);
        }

        let mut summary = ScanSummary::new();

        for entry in walker(root).into_iter().filter_map(readable) {
            if !is_regular_file(&entry) {
                continue;
            }

            match (self.counter)(entry.path()) {
                Ok(lines) => {
                    let file = FileLineCount::new(entry.into_path(), lines);
                    debug!("{}: {lines} lines", file.path.display());
                    writeln!(self.out, "{}: {} lines", file.name(), file.lines)?;
                    summary.record(&file);
                }
                Err(err) => match self.policy {
                    ErrorPolicy::FailFast => return Err(err),
                    ErrorPolicy::Continue => {
                        warn!("Continuing past unreadable file: {err}");
                        summary.record_failure(FileFailure::new(entry.into_path(), &err));
                    }
                },
            }
        }

        writeln!(
            self.out,
            "\nTotal lines in the folder '{}': {} lines",
            root.display(),
            summary.total_lines
        )?;

        Ok(ScanOutcome::Completed(summary))
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}
