// src/models/scan_summary.rs
use std::path::PathBuf;

use crate::error::ScanError;
use crate::models::FileLineCount;

/// A file that was found but could not be counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl FileFailure {
    #[must_use]
    pub fn new(path: PathBuf, err: &ScanError) -> Self {
        Self {
            path,
            reason: err.to_string(),
        }
    }
}

/// Running totals for one scan.
///
/// `total_lines` is only ever raised through [`ScanSummary::record`], so it
/// always equals the sum of the line counts recorded so far.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: u64,
    pub total_lines: u64,
    pub failures: Vec<FileFailure>,
}

impl ScanSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            total_lines: 0,
            failures: Vec::new(),
        }
    }

    #[inline]
    pub fn record(&mut self, file: &FileLineCount) {
        self.files = self.files.saturating_add(1);
        self.total_lines = self.total_lines.saturating_add(file.lines);
    }

    #[inline]
    pub fn record_failure(&mut self, failure: FileFailure) {
        self.failures.push(failure);
    }

    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The root did not exist; only the "does not exist" line was written.
    MissingRoot,
    Completed(ScanSummary),
}
