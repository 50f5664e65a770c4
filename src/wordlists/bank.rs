//! Per-length word banks
//!
//! A [`WordBank`] maps each supported word length to a [`WordList`] of
//! allowed guesses and candidate answers. Each list comes from the first
//! source that yields words:
//!
//! 1. curated files in the word-list directory
//! 2. system dictionaries (five letters only)
//! 3. the fallback list embedded in the binary

use super::embedded::fallback_for;
use super::filter::{ANSWER_POOL_SIZE, is_banned, rank_answers};
use super::loader::{load_from_file, words_from_slice};
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Word lengths the game can be played at
pub const SUPPORTED_WORD_LENGTHS: [usize; 4] = [3, 4, 5, 6];

/// Word length used when a new game does not ask for one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Dictionaries probed for five-letter words when no curated lists exist
pub const SYSTEM_DICTIONARIES: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/share/dict/web2",
    "/usr/share/dict/web2a",
    "/usr/share/dict/connectives",
    "/usr/share/dict/propernames",
];

/// Only this length may fall back to system dictionaries, which are not
/// curated for younger players
const SYSTEM_DICTIONARY_LENGTH: usize = 5;

/// Where a word list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    Curated,
    SystemDictionary,
    Embedded,
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curated => write!(f, "curated lists"),
            Self::SystemDictionary => write!(f, "system dictionaries"),
            Self::Embedded => write!(f, "built-in list"),
        }
    }
}

/// Error type for word bank construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    UnsupportedLength(usize),
    NoWords(usize),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => write!(f, "Unsupported word length: {len}"),
            Self::NoWords(len) => write!(f, "No word lists found for {len}-letter mode"),
        }
    }
}

impl std::error::Error for BankError {}

/// Guess and answer vocabulary for one word length
#[derive(Debug, Clone)]
pub struct WordList {
    word_length: usize,
    guesses: FxHashSet<String>,
    answers: Vec<String>,
    source: WordSource,
}

impl WordList {
    /// Create a word list
    ///
    /// # Errors
    /// Returns `BankError::NoWords` if there are no answers to pick from.
    pub fn new(
        word_length: usize,
        guesses: FxHashSet<String>,
        answers: Vec<String>,
        source: WordSource,
    ) -> Result<Self, BankError> {
        if answers.is_empty() {
            return Err(BankError::NoWords(word_length));
        }
        Ok(Self {
            word_length,
            guesses,
            answers,
            source,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> WordSource {
        self.source
    }

    /// All allowed guesses
    #[must_use]
    pub const fn guesses(&self) -> &FxHashSet<String> {
        &self.guesses
    }

    /// Candidate answers in their ranked or sorted order
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Check if a lower-case word may be guessed
    #[inline]
    #[must_use]
    pub fn is_allowed_guess(&self, word: &str) -> bool {
        self.guesses.contains(word)
    }

    /// Pick a uniformly random answer
    #[must_use]
    pub fn pick_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Construction guarantees at least one answer
        self.answers.choose(rng).map_or("", String::as_str)
    }
}

/// Locations to read word sources from
#[derive(Debug, Clone)]
pub struct WordSources {
    pub wordlist_dir: PathBuf,
    pub system_dictionaries: Vec<PathBuf>,
}

impl WordSources {
    /// Curated lists from `wordlist_dir`, plus the standard system dictionaries
    #[must_use]
    pub fn new(wordlist_dir: impl Into<PathBuf>) -> Self {
        Self {
            wordlist_dir: wordlist_dir.into(),
            system_dictionaries: SYSTEM_DICTIONARIES.iter().map(PathBuf::from).collect(),
        }
    }

    /// Curated guess and answer file paths for a length
    ///
    /// Five-letter games keep the legacy unsuffixed file names.
    #[must_use]
    pub fn curated_paths(&self, word_length: usize) -> (PathBuf, PathBuf) {
        if word_length == 5 {
            (
                self.wordlist_dir.join("allowed-guesses.txt"),
                self.wordlist_dir.join("allowed-answers.txt"),
            )
        } else {
            (
                self.wordlist_dir
                    .join(format!("allowed-guesses-{word_length}.txt")),
                self.wordlist_dir
                    .join(format!("allowed-answers-{word_length}.txt")),
            )
        }
    }
}

/// Immutable map from word length to its word list
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    lists: FxHashMap<usize, Arc<WordList>>,
}

impl WordBank {
    /// Build lists for every supported length
    ///
    /// # Errors
    /// Returns `BankError` if any length ends up without words.
    pub fn load(sources: &WordSources) -> Result<Self, BankError> {
        let mut bank = Self::default();
        for length in SUPPORTED_WORD_LENGTHS {
            bank.insert(load_words_for_length(sources, length)?);
        }
        Ok(bank)
    }

    /// Add or replace the list for its length
    pub fn insert(&mut self, list: WordList) {
        self.lists.insert(list.word_length(), Arc::new(list));
    }

    /// Shared handle to the list for `word_length`
    #[must_use]
    pub fn get(&self, word_length: usize) -> Option<Arc<WordList>> {
        self.lists.get(&word_length).cloned()
    }

    /// Loaded lengths in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.lists.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

/// Load the guess and answer lists for one word length
///
/// # Errors
/// Returns `BankError::UnsupportedLength` for lengths outside
/// [`SUPPORTED_WORD_LENGTHS`], or `BankError::NoWords` if every source is
/// empty.
pub fn load_words_for_length(
    sources: &WordSources,
    word_length: usize,
) -> Result<WordList, BankError> {
    if !SUPPORTED_WORD_LENGTHS.contains(&word_length) {
        return Err(BankError::UnsupportedLength(word_length));
    }

    if let Some(list) = load_curated(sources, word_length) {
        return Ok(list);
    }

    if word_length == SYSTEM_DICTIONARY_LENGTH
        && let Some(list) = load_system_dictionaries(&sources.system_dictionaries, word_length)
    {
        return Ok(list);
    }

    load_embedded(word_length)
}

/// Read one source file, treating missing or unreadable files as empty
fn load_source(path: &Path, word_length: usize) -> FxHashSet<String> {
    if !path.exists() {
        return FxHashSet::default();
    }
    match load_from_file(path, word_length) {
        Ok(words) => {
            if !words.is_empty() {
                info!(
                    "Loaded {} {word_length}-letter words from {}.",
                    words.len(),
                    path.display()
                );
            }
            words
        }
        Err(e) => {
            warn!("Could not read {}: {e}", path.display());
            FxHashSet::default()
        }
    }
}

fn remove_banned(words: &mut FxHashSet<String>) {
    words.retain(|w| !is_banned(w));
}

fn sorted(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_unstable();
    words
}

fn load_curated(sources: &WordSources, word_length: usize) -> Option<WordList> {
    let (guess_path, answer_path) = sources.curated_paths(word_length);
    let mut guesses = load_source(&guess_path, word_length);
    let mut answers = load_source(&answer_path, word_length);
    remove_banned(&mut guesses);
    remove_banned(&mut answers);

    if guesses.is_empty() || answers.is_empty() {
        return None;
    }

    // The legacy five-letter lists pair a strict answer list with a broader
    // guess list that may not contain every answer, so answers are merged in.
    // Generated lists for other lengths instead drop answers that are not
    // guessable. Both leave answers within guesses, by different routes.
    // TODO: settle on one policy once the five-letter lists are regenerated.
    if word_length == 5 {
        guesses.extend(answers.iter().cloned());
    } else {
        answers.retain(|w| guesses.contains(w));
        if answers.is_empty() {
            warn!("Curated {word_length}-letter answers share no words with guesses; ignoring them.");
            return None;
        }
    }

    info!(
        "Using curated word lists for {word_length}-letter games ({} answers, {} guesses).",
        answers.len(),
        guesses.len()
    );
    WordList::new(word_length, guesses, sorted(answers), WordSource::Curated).ok()
}

fn load_system_dictionaries(paths: &[PathBuf], word_length: usize) -> Option<WordList> {
    let mut candidates = FxHashSet::default();
    for path in paths {
        candidates.extend(load_source(path, word_length));
    }
    remove_banned(&mut candidates);

    if candidates.is_empty() {
        return None;
    }

    let filtered = sorted(candidates);
    info!(
        "Using filtered system dictionaries: {} words (excluding banned terms).",
        filtered.len()
    );
    let answers = rank_answers(&filtered, ANSWER_POOL_SIZE);
    let guesses = filtered.into_iter().collect();
    WordList::new(word_length, guesses, answers, WordSource::SystemDictionary).ok()
}

fn load_embedded(word_length: usize) -> Result<WordList, BankError> {
    let raw = fallback_for(word_length).ok_or(BankError::NoWords(word_length))?;
    let mut guesses = words_from_slice(raw, word_length);
    remove_banned(&mut guesses);

    info!(
        "Using built-in {word_length}-letter word list ({} words).",
        guesses.len()
    );
    let answers = sorted(guesses.iter().cloned());
    WordList::new(word_length, guesses, answers, WordSource::Embedded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sources_in(dir: &TempDir) -> WordSources {
        WordSources {
            wordlist_dir: dir.path().to_path_buf(),
            system_dictionaries: Vec::new(),
        }
    }

    fn write(dir: &TempDir, name: &str, words: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, words.join("\n") + "\n").unwrap();
        path
    }

    #[test]
    fn curated_paths_keep_legacy_five_letter_names() {
        let sources = WordSources::new("wordlist");
        let (g5, a5) = sources.curated_paths(5);
        assert_eq!(g5, Path::new("wordlist/allowed-guesses.txt"));
        assert_eq!(a5, Path::new("wordlist/allowed-answers.txt"));

        let (g4, a4) = sources.curated_paths(4);
        assert_eq!(g4, Path::new("wordlist/allowed-guesses-4.txt"));
        assert_eq!(a4, Path::new("wordlist/allowed-answers-4.txt"));
    }

    #[test]
    fn five_letter_curated_unions_answers_into_guesses() {
        let dir = TempDir::new().unwrap();
        write(&dir, "allowed-guesses.txt", &["crane", "slate", "vulva"]);
        write(&dir, "allowed-answers.txt", &["apple", "crane"]);

        let list = load_words_for_length(&sources_in(&dir), 5).unwrap();
        assert_eq!(list.source(), WordSource::Curated);
        assert_eq!(list.answers(), &["apple", "crane"]);
        assert!(list.is_allowed_guess("apple"));
        assert!(list.is_allowed_guess("slate"));
        assert!(!list.is_allowed_guess("vulva"));
        assert_eq!(list.guesses().len(), 3);
    }

    #[test]
    fn other_lengths_intersect_answers_into_guesses() {
        let dir = TempDir::new().unwrap();
        write(&dir, "allowed-guesses-4.txt", &["lamp", "bird", "fish"]);
        write(&dir, "allowed-answers-4.txt", &["lamp", "frog", "bird"]);

        let list = load_words_for_length(&sources_in(&dir), 4).unwrap();
        assert_eq!(list.source(), WordSource::Curated);
        assert_eq!(list.answers(), &["bird", "lamp"]);
        assert!(!list.is_allowed_guess("frog"));
    }

    #[test]
    fn disjoint_curated_lists_fall_back() {
        let dir = TempDir::new().unwrap();
        write(&dir, "allowed-guesses-3.txt", &["cat"]);
        write(&dir, "allowed-answers-3.txt", &["dog"]);

        let list = load_words_for_length(&sources_in(&dir), 3).unwrap();
        assert_eq!(list.source(), WordSource::Embedded);
    }

    #[test]
    fn missing_answer_file_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        write(&dir, "allowed-guesses-6.txt", &["garden"]);

        let list = load_words_for_length(&sources_in(&dir), 6).unwrap();
        assert_eq!(list.source(), WordSource::Embedded);
        assert!(list.is_allowed_guess("garden"));
        assert!(list.answers().iter().all(|w| list.is_allowed_guess(w)));
    }

    #[test]
    fn system_dictionaries_used_for_five_letters() {
        let dir = TempDir::new().unwrap();
        let dict = write(
            &dir,
            "words",
            &["Crane", "slate", "jazzy", "kings", "dildo", "irate", "cat"],
        );
        let sources = WordSources {
            wordlist_dir: dir.path().join("missing"),
            system_dictionaries: vec![dict, dir.path().join("web2")],
        };

        let list = load_words_for_length(&sources, 5).unwrap();
        assert_eq!(list.source(), WordSource::SystemDictionary);
        // dildo is banned, kings is a plural; jazzy is guessable but unfair
        assert_eq!(list.guesses().len(), 4);
        assert_eq!(list.answers(), &["irate", "slate", "crane"]);
    }

    #[test]
    fn system_dictionaries_ignored_for_other_lengths() {
        let dir = TempDir::new().unwrap();
        let dict = write(&dir, "words", &["cat", "dog"]);
        let sources = WordSources {
            wordlist_dir: dir.path().to_path_buf(),
            system_dictionaries: vec![dict],
        };

        let list = load_words_for_length(&sources, 3).unwrap();
        assert_eq!(list.source(), WordSource::Embedded);
    }

    #[test]
    fn unsupported_length_rejected() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            load_words_for_length(&sources_in(&dir), 7).unwrap_err(),
            BankError::UnsupportedLength(7)
        );
    }

    #[test]
    fn bank_loads_every_supported_length() {
        let dir = TempDir::new().unwrap();
        let bank = WordBank::load(&sources_in(&dir)).unwrap();

        assert_eq!(bank.lengths(), SUPPORTED_WORD_LENGTHS.to_vec());
        for length in SUPPORTED_WORD_LENGTHS {
            let list = bank.get(length).unwrap();
            assert_eq!(list.word_length(), length);
            assert!(!list.answers().is_empty());
        }
        assert!(bank.get(7).is_none());
    }

    #[test]
    fn pick_answer_comes_from_answers() {
        let dir = TempDir::new().unwrap();
        let list = load_words_for_length(&sources_in(&dir), 4).unwrap();
        let mut rng = rand::rng();
        for _ in 0..20 {
            let answer = list.pick_answer(&mut rng);
            assert!(list.answers().iter().any(|w| w == answer));
        }
    }

    #[test]
    fn empty_answers_rejected() {
        let result = WordList::new(5, FxHashSet::default(), Vec::new(), WordSource::Curated);
        assert_eq!(result.unwrap_err(), BankError::NoWords(5));
    }
}
