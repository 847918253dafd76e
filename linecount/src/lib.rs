// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::{Config, DEFAULT_ROOT, ErrorPolicy};
pub use crate::core::counter::{count_lines, count_lines_in_bytes, decode_lossy};
pub use crate::core::scanner::{Reporter, collect_files};
pub use error::ScanError;
pub use models::{FileFailure, FileLineCount, ScanOutcome, ScanSummary};
