// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Tree used across the scanner tests:
///
/// ```text
/// a.txt          2 lines
/// empty.txt      0 lines
/// sub/b.txt      1 line (no trailing newline)
/// sub/deep/c.md  3 lines
/// ```
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a.txt", "line1\nline2\n")?;
    create_test_file(&dir, "empty.txt", "")?;
    create_test_file(&dir, "sub/b.txt", "x")?;
    create_test_file(&dir, "sub/deep/c.md", "# Title\n\nBody\n")?;

    Ok(dir)
}
