// src/core/counter.rs
use memchr::memmem;
use std::fs::File;
use std::io::{self, Read as _};
use std::path::Path;

use crate::error::ScanError;

/// Counts the lines in a single file.
///
/// The whole file is read and decoded as UTF-8 with invalid byte sequences
/// dropped, so decoding never fails. `\n`, `\r\n` and a lone `\r` each end a
/// line, and a trailing segment with no terminator is one more line when it is
/// non-empty.
///
/// # Arguments
///
/// * `path` - The file to count
///
/// # Returns
///
/// * `Ok(u64)` - The number of lines in the file
///
/// # Errors
///
/// Returns [`ScanError::FileAccess`] if the file cannot be opened or read,
/// for example when it was removed after being discovered or is not readable.
#[inline]
pub fn count_lines(path: &Path) -> Result<u64, ScanError> {
    let access = |source: io::Error| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut content = Vec::new();
    File::open(path)
        .map_err(access)?
        .read_to_end(&mut content)
        .map_err(access)?;

    Ok(count_lines_in_bytes(&content))
}

/// Line count of raw file content, decoded the same way as [`count_lines`].
#[inline]
#[must_use]
pub fn count_lines_in_bytes(content: &[u8]) -> u64 {
    count_lines_in_text(&decode_lossy(content))
}

/// Decodes UTF-8, silently dropping any byte sequence that is not valid.
#[must_use]
pub fn decode_lossy(content: &[u8]) -> String {
    let mut text = String::with_capacity(content.len());
    for chunk in content.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

fn count_lines_in_text(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let line_feeds = bytecount::count(bytes, b'\n');
    let carriage_returns = bytecount::count(bytes, b'\r');
    let crlf_pairs = memmem::find_iter(bytes, b"\r\n").count();

    // Each CRLF pair was counted once as `\r` and once as `\n`.
    let terminated = line_feeds + carriage_returns - crlf_pairs;
    let open_tail = bytes.last().is_some_and(|&last| !matches!(last, b'\n' | b'\r'));

    u64::try_from(terminated + usize::from(open_tail)).unwrap_or(u64::MAX)
}
