// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, scan_to_string};
use anyhow::Result;
use linecount::{ErrorPolicy, ScanOutcome, ScanSummary};
use tempfile::TempDir;

#[test]
fn test_missing_root_prints_only_notice() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope");

    let (outcome, output) = scan_to_string(&missing, ErrorPolicy::Continue)?;

    assert_eq!(outcome, ScanOutcome::MissingRoot);
    assert_eq!(
        output,
        format!("The folder '{}' does not exist.\n", missing.display())
    );
    assert!(!output.contains("Total lines"));

    Ok(())
}

#[test]
fn test_empty_root_totals_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("a/b/c"))?;

    let (outcome, output) = scan_to_string(temp_dir.path(), ErrorPolicy::FailFast)?;

    assert_eq!(outcome, ScanOutcome::Completed(ScanSummary::new()));
    assert_eq!(
        output,
        format!(
            "\nTotal lines in the folder '{}': 0 lines\n",
            temp_dir.path().display()
        )
    );

    Ok(())
}

#[test]
fn test_file_root_counts_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "single.txt", b"a\nb\n")?;
    let root = temp_dir.path().join("single.txt");

    let (_, output) = scan_to_string(&root, ErrorPolicy::FailFast)?;

    assert!(!output.contains("single.txt: "));
    assert!(output.ends_with(": 0 lines\n"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_counted() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "real/data.txt", b"1\n2\n3\n")?;
    symlink(
        temp_dir.path().join("real/data.txt"),
        temp_dir.path().join("data_link.txt"),
    )?;
    symlink(temp_dir.path().join("real"), temp_dir.path().join("real_link"))?;
    symlink(
        temp_dir.path().join("gone.txt"),
        temp_dir.path().join("dangling.txt"),
    )?;

    let (outcome, output) = scan_to_string(temp_dir.path(), ErrorPolicy::FailFast)?;

    assert_eq!(output.matches("data.txt: 3 lines").count(), 1);
    assert!(!output.contains("data_link.txt"));
    assert!(!output.contains("dangling.txt"));
    let ScanOutcome::Completed(summary) = outcome else {
        panic!("Existing root should complete");
    };
    assert_eq!(summary.files, 1);
    assert_eq!(summary.total_lines, 3);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_root_is_followed() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "target/one.txt", b"1\n")?;
    let root = temp_dir.path().join("root_link");
    symlink(temp_dir.path().join("target"), &root)?;

    let (_, output) = scan_to_string(&root, ErrorPolicy::FailFast)?;

    assert!(output.starts_with("one.txt: 1 lines\n"));

    Ok(())
}
