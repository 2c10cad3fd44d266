//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Location of the system dictionary used by `--harder`
pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

/// Load a dictionary from a file with one word per line
///
/// Invalid entries are skipped (see [`Dictionary::from_lines`]).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(content.lines()))
}

/// Convert an embedded string slice into a dictionary
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::COMMON;
///
/// let dictionary = words_from_slice(COMMON);
/// assert!(!dictionary.is_empty());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_lines(slice.iter().copied())
}
