// src/core/scanner/walk.rs
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::is_regular_file;

/// Traversal shared by the reporter and [`collect_files`].
///
/// The root is followed if it is a symlink, but nothing below it is. The root
/// itself is never yielded, so a root that is a plain file produces no entries.
/// Entries are sorted by name within each directory to keep output stable.
pub(super) fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
}

/// Unwraps a traversal result, logging and skipping entries that could not be
/// read (usually a directory without read permission).
pub(super) fn readable(entry: walkdir::Result<walkdir::DirEntry>) -> Option<walkdir::DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!("Skipping unreadable entry: {err}");
            None
        }
    }
}

/// Lists every regular file under `root`, at any depth, in traversal order.
///
/// # Arguments
///
/// * `root` - The directory to walk
///
/// # Returns
///
/// Paths of all regular files found. Symlinks, devices and other special
/// entries are left out, and an unreadable subdirectory is skipped.
#[must_use]
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    walker(root)
        .into_iter()
        .filter_map(readable)
        .filter(is_regular_file)
        .map(walkdir::DirEntry::into_path)
        .collect()
}
