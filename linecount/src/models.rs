// src/models.rs
mod file_line_count;
mod scan_summary;

pub use file_line_count::FileLineCount;
pub use scan_summary::{FileFailure, ScanOutcome, ScanSummary};
