//! Curated word list generation
//!
//! Builds kid-friendly guess and answer lists from local dictionary,
//! frequency, profanity and name files. Frequency ranks bound both pools:
//! rank 1 is the most common word.

use super::blocklists::{ANSWER_BLOCK, CUSTOM_BLOCK, NON_PLURAL_S, NON_WORDS};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lengths with frequency thresholds for curation
pub const CURATED_LENGTHS: [usize; 3] = [3, 4, 6];

/// Highest frequency rank admitted as a guess
#[must_use]
pub const fn guess_rank_threshold(word_length: usize) -> Option<usize> {
    match word_length {
        3 => Some(30_000),
        4 => Some(40_000),
        6 => Some(50_000),
        _ => None,
    }
}

/// Highest frequency rank admitted as an answer
#[must_use]
pub const fn answer_rank_threshold(word_length: usize) -> Option<usize> {
    match word_length {
        3 => Some(8_000),
        4 => Some(12_000),
        6 => Some(22_000),
        _ => None,
    }
}

/// Lower-case word made only of `a-z`
fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parse one word per line, keeping plain lower-case words
#[must_use]
pub fn parse_word_lines(blob: &str) -> FxHashSet<String> {
    blob.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|w| is_plain_word(w))
        .collect()
}

/// Parse a JSON array of strings, keeping plain lower-case words
///
/// Non-string items are ignored.
///
/// # Errors
/// Returns the JSON error if `blob` is not valid JSON.
pub fn parse_json_words(blob: &str) -> serde_json::Result<FxHashSet<String>> {
    let payload: serde_json::Value = serde_json::from_str(blob)?;
    let words = payload
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(|s| s.trim().to_lowercase())
                .filter(|w| is_plain_word(w))
                .collect()
        })
        .unwrap_or_default();
    Ok(words)
}

/// Parse a frequency list into ranks
///
/// Each line starts with a word, optionally followed by a count. Ranks count
/// plain words only, starting at 1; a repeated word keeps its first rank.
///
/// # Examples
/// ```
/// use wordle_server::wordlists::curate::parse_frequency_ranks;
///
/// let ranks = parse_frequency_ranks("the 100\nI'm 90\nand 80\nThe 10\n");
/// assert_eq!(ranks["the"], 1);
/// assert_eq!(ranks["and"], 2);
/// ```
#[must_use]
pub fn parse_frequency_ranks(blob: &str) -> FxHashMap<String, usize> {
    let mut ranks = FxHashMap::default();
    let mut rank = 0;
    for line in blob.lines() {
        let Some(first) = line.split_whitespace().next() else {
            continue;
        };
        let word = first.to_lowercase();
        if !is_plain_word(&word) {
            continue;
        }
        rank += 1;
        ranks.entry(word).or_insert(rank);
    }
    ranks
}

/// Read a word file, parsing it as a JSON array when it looks like one
fn read_word_file(path: &Path) -> io::Result<FxHashSet<String>> {
    let blob = String::from_utf8_lossy(&fs::read(path)?).into_owned();
    if blob.trim_start().starts_with('[') {
        parse_json_words(&blob).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    } else {
        Ok(parse_word_lines(&blob))
    }
}

/// Input files for curation
#[derive(Debug, Clone, Default)]
pub struct CurationInputs {
    pub dictionaries: Vec<PathBuf>,
    pub frequency: Option<PathBuf>,
    pub profanity: Vec<PathBuf>,
    pub names: Vec<PathBuf>,
}

/// Parsed word sources for curation
#[derive(Debug, Clone, Default)]
pub struct CurationSources {
    /// One set per dictionary file
    pub dictionaries: Vec<FxHashSet<String>>,
    pub frequency_rank: FxHashMap<String, usize>,
    /// Profanity plus the custom block list
    pub blocked: FxHashSet<String>,
    pub names: FxHashSet<String>,
}

impl CurationSources {
    /// Read and parse every input file
    ///
    /// # Errors
    /// Returns an I/O error naming the first file that cannot be read.
    pub fn load(inputs: &CurationInputs) -> io::Result<Self> {
        fn with_path(path: &Path, e: io::Error) -> io::Error {
            io::Error::new(e.kind(), format!("{}: {e}", path.display()))
        }

        let mut sources = Self::default();
        for path in &inputs.dictionaries {
            sources
                .dictionaries
                .push(read_word_file(path).map_err(|e| with_path(path, e))?);
        }
        if let Some(path) = &inputs.frequency {
            let bytes = fs::read(path).map_err(|e| with_path(path, e))?;
            sources.frequency_rank = parse_frequency_ranks(&String::from_utf8_lossy(&bytes));
        }
        for path in &inputs.profanity {
            sources
                .blocked
                .extend(read_word_file(path).map_err(|e| with_path(path, e))?);
        }
        for path in &inputs.names {
            sources
                .names
                .extend(read_word_file(path).map_err(|e| with_path(path, e))?);
        }
        sources
            .blocked
            .extend(CUSTOM_BLOCK.iter().map(|&w| w.to_string()));
        Ok(sources)
    }

    /// Every word seen in any dictionary or the frequency list
    fn all_candidates(&self) -> FxHashSet<&str> {
        self.dictionaries
            .iter()
            .flatten()
            .chain(self.frequency_rank.keys())
            .map(String::as_str)
            .collect()
    }

    /// Number of dictionaries containing `word`
    fn dictionary_hits(&self, word: &str) -> usize {
        self.dictionaries.iter().filter(|d| d.contains(word)).count()
    }

    fn rank(&self, word: &str) -> Option<usize> {
        self.frequency_rank.get(word).copied()
    }

    /// Safe for any player to see, as a guess or an answer
    #[must_use]
    pub fn is_safe_candidate(&self, word: &str) -> bool {
        !(self.blocked.contains(word)
            || self.names.contains(word)
            || NON_WORDS.contains(word)
            || word.ends_with("eth")
            || word.ends_with("est"))
    }
}

/// Check if a guessable word is suitable as a kid-friendly answer
///
/// # Examples
/// ```
/// use wordle_server::wordlists::curate::is_kid_friendly_answer;
///
/// assert!(is_kid_friendly_answer("lamp"));
/// assert!(is_kid_friendly_answer("gym"));
/// assert!(is_kid_friendly_answer("glass"));
/// assert!(!is_kid_friendly_answer("lamps"));
/// assert!(!is_kid_friendly_answer("psst"));
/// ```
#[must_use]
pub fn is_kid_friendly_answer(word: &str) -> bool {
    if ANSWER_BLOCK.contains(word) {
        return false;
    }
    if !word.bytes().any(|b| b"aeiouy".contains(&b)) {
        return false;
    }
    if word
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
    {
        return false;
    }
    // Plurals and third-person forms
    !(word.ends_with('s') && !word.ends_with("ss") && !NON_PLURAL_S.contains(&word))
}

/// Guess and answer lists produced for one length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedList {
    pub word_length: usize,
    pub guesses: Vec<String>,
    pub answers: Vec<String>,
}

/// Build curated lists for one length
///
/// Returns `None` for lengths without frequency thresholds.
///
/// A safe candidate becomes a guess when its frequency rank is within the
/// guess threshold or at least two dictionaries list it. A guess becomes an
/// answer when its rank is within the answer threshold and it passes
/// [`is_kid_friendly_answer`]. Answers are always a subset of guesses.
#[must_use]
pub fn curate(sources: &CurationSources, word_length: usize) -> Option<CuratedList> {
    let guess_threshold = guess_rank_threshold(word_length)?;
    let answer_threshold = answer_rank_threshold(word_length)?;

    let candidates: Vec<&str> = sources
        .all_candidates()
        .into_iter()
        .filter(|w| w.len() == word_length)
        .collect();

    let mut guesses: Vec<String> = candidates
        .par_iter()
        .filter(|&&w| sources.is_safe_candidate(w))
        .filter(|&&w| {
            sources.rank(w).is_some_and(|r| r <= guess_threshold)
                || sources.dictionary_hits(w) >= 2
        })
        .map(|&w| w.to_string())
        .collect();
    guesses.par_sort_unstable();

    // Filtering the sorted guesses keeps answers sorted and within guesses
    let answers: Vec<String> = guesses
        .par_iter()
        .filter(|w| sources.rank(w).is_some_and(|r| r <= answer_threshold))
        .filter(|w| is_kid_friendly_answer(w))
        .cloned()
        .collect();

    Some(CuratedList {
        word_length,
        guesses,
        answers,
    })
}

/// Write a curated list as `allowed-guesses-N.txt` / `allowed-answers-N.txt`
///
/// # Errors
/// Returns an I/O error if the directory cannot be created or a file cannot
/// be written.
pub fn write_curated(out_dir: &Path, list: &CuratedList) -> io::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)?;
    let n = list.word_length;
    let guess_path = out_dir.join(format!("allowed-guesses-{n}.txt"));
    let answer_path = out_dir.join(format!("allowed-answers-{n}.txt"));
    fs::write(&guess_path, lines(&list.guesses))?;
    fs::write(&answer_path, lines(&list.answers))?;
    Ok((guess_path, answer_path))
}

fn lines(words: &[String]) -> String {
    let mut out = words.join("\n");
    out.push('\n');
    out
}
