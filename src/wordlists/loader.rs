//! Word list loading utilities
//!
//! Reads word files line by line, keeping only entries that pass
//! [`is_allowed_word`] for the requested length.

use super::filter::is_allowed_word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load playable words of `word_length` from a file
///
/// Lines are trimmed and lower-cased. Invalid UTF-8 is replaced rather than
/// rejected, so system dictionaries with stray bytes still load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_server::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist/allowed-guesses-4.txt", 4).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<FxHashSet<String>> {
    let bytes = fs::read(path)?;
    Ok(words_from_str(&String::from_utf8_lossy(&bytes), word_length))
}

/// Collect playable words of `word_length` from newline-separated text
#[must_use]
pub fn words_from_str(content: &str, word_length: usize) -> FxHashSet<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_allowed_word(word, word_length))
        .collect()
}

/// Collect playable words of `word_length` from an embedded slice
///
/// # Examples
/// ```
/// use wordle_server::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "Slate", "toolong", "crypt"], 5);
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("slate"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> FxHashSet<String> {
    slice
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|word| is_allowed_word(word, word_length))
        .collect()
}
