//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or from embedded constants.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one raw dictionary entry
///
/// Trims and uppercases the entry. Returns `None` for blank lines, comment
/// lines starting with `#`, and entries containing anything but ASCII letters.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let word = trimmed.to_ascii_uppercase();
    if word.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(word)
    } else {
        log::warn!("skipping dictionary entry '{trimmed}': not a plain word");
        None
    }
}

/// Build a dictionary from raw text, one word per line
#[must_use]
pub fn parse(content: &str) -> Dictionary {
    Dictionary::from_normalized(content.lines().filter_map(normalize))
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["cat", "dog"]);
/// assert!(dictionary.contains("CAT"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_normalized(slice.iter().filter_map(|&s| normalize(s)))
}
