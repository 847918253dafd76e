// src/core/scanner.rs
mod report;
mod walk;

#[cfg(test)]
pub mod test_utils;

pub use report::Reporter;
pub use walk::collect_files;
