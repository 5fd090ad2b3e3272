//! Word list loading utilities
//!
//! Loads user-supplied root-word or dictionary files as alternatives to the
//! embedded lists.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. Returns every
/// remaining entry verbatim — validity against a given root is the
/// pipeline's job, not the loader's.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Callers treat this as a
/// fatal startup condition: the game must not begin without its word lists.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word list
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
