// src/utils.rs
use std::borrow::Cow;
use std::path::Path;

/// Base name shown in the per-file report line. Falls back to the whole path
/// when it has no final component (e.g. `..`).
pub fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}

/// Only entries whose own type is a regular file are counted; symlinks are
/// never resolved here.
pub fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
}
