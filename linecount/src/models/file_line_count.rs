// src/models/file_line_count.rs
use std::borrow::Cow;
use std::path::PathBuf;

use crate::utils::display_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineCount {
    pub path: PathBuf,
    pub lines: u64,
}

impl FileLineCount {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf, lines: u64) -> Self {
        Self { path, lines }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        display_name(&self.path)
    }
}
