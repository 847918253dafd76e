// src/config.rs
use std::path::PathBuf;

use crate::cli::Args;

/// Directory scanned when no root is given on the command line.
pub const DEFAULT_ROOT: &str = "src";

/// What the scan does when a discovered file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort on the first unreadable file. No total is printed.
    #[default]
    FailFast,
    /// Record the failure, keep going, and report failures after the total.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub policy: ErrorPolicy,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            policy: ErrorPolicy::default(),
        }
    }
}

impl From<&Args> for Config {
    #[inline]
    fn from(args: &Args) -> Self {
        Self {
            root: args.root.clone(),
            policy: if args.keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::FailFast
            },
        }
    }
}
