//! Word acceptance and answer ranking heuristics
//!
//! These checks decide which raw dictionary entries become playable words,
//! and which playable words make fair answers.

use rayon::prelude::*;

/// Standard vowels; `y` does not count here
pub const VOWELS: &[u8] = b"aeiou";

/// Double letters that make for unfair puzzles
pub const RARE_DOUBLES: &[&str] = &["zz", "xx", "qq", "yy", "jj", "ww"];

/// Size of the answer pool built from system dictionaries
pub const ANSWER_POOL_SIZE: usize = 3500;

/// Penalty per repeated letter when scoring answers
const DUPLICATE_PENALTY: f64 = 2.0;

/// Obscene, profane or derogatory terms kept out of every game mode
pub const BANNED_WORDS: &[&str] = &[
    "abuse", "anus", "bitch", "boobs", "clits", "cocks", "cunts", "dicks", "dildo", "farts",
    "fuck", "fucks", "godam", "whore", "sluts", "slut", "titty", "twats", "pussy", "penis",
    "poops", "vulva",
];

/// Relative frequency of a letter in English text (percent)
#[must_use]
pub const fn letter_frequency(letter: u8) -> f64 {
    match letter {
        b'e' => 12.0,
        b't' => 9.1,
        b'a' => 8.1,
        b'o' => 7.7,
        b'i' => 7.3,
        b'n' => 7.0,
        b's' => 6.3,
        b'r' => 6.0,
        b'h' => 5.9,
        b'l' => 4.0,
        b'd' => 3.8,
        b'c' | b'u' => 2.7,
        b'm' => 2.5,
        b'w' => 2.4,
        b'f' => 2.2,
        b'g' | b'y' => 2.0,
        b'p' => 1.8,
        b'b' => 1.5,
        b'v' => 1.1,
        b'k' => 0.7,
        b'j' | b'x' | b'q' | b'z' => 0.1,
        _ => 0.0,
    }
}

/// Check for at least one of a, e, i, o, u
#[must_use]
pub fn has_standard_vowel(word: &str) -> bool {
    word.bytes().any(|b| VOWELS.contains(&b))
}

/// Check if a word is on the banned list
#[must_use]
pub fn is_banned(word: &str) -> bool {
    BANNED_WORDS.contains(&word)
}

/// Check if a lower-cased word is playable at `word_length`
///
/// Requires exact length, ASCII letters only, and a standard vowel. Words of
/// five or more letters ending in a single `s` are treated as plurals and
/// rejected.
///
/// # Examples
/// ```
/// use wordle_server::wordlists::filter::is_allowed_word;
///
/// assert!(is_allowed_word("crane", 5));
/// assert!(is_allowed_word("glass", 5));
/// assert!(!is_allowed_word("cranes", 6));
/// assert!(!is_allowed_word("crypt", 5));
/// assert!(is_allowed_word("cats", 4));
/// ```
#[must_use]
pub fn is_allowed_word(word: &str, word_length: usize) -> bool {
    if word.len() != word_length
        || !word.bytes().all(|b| b.is_ascii_lowercase())
        || !has_standard_vowel(word)
    {
        return false;
    }
    !(word_length >= 5 && word.ends_with('s') && !word.ends_with("ss"))
}

/// Score a candidate answer
///
/// Sum of letter frequencies over distinct letters, minus a penalty for each
/// repeated letter. Higher scores mean more varied, more common letters.
#[must_use]
pub fn score_word(word: &str) -> f64 {
    let uniques = distinct_letters(word);
    let duplicates = word.len() - uniques.len();
    let frequency: f64 = uniques.iter().map(|&b| letter_frequency(b)).sum();
    frequency - duplicates as f64 * DUPLICATE_PENALTY
}

/// Distinct letters in sorted order, so sums over them are reproducible
fn distinct_letters(word: &str) -> Vec<u8> {
    let mut letters: Vec<u8> = word.bytes().collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

/// Check if a word makes a fair answer
///
/// Needs a vowel, no rare double letters and at least four distinct letters.
#[must_use]
pub fn is_fair_answer(word: &str) -> bool {
    has_standard_vowel(word)
        && !RARE_DOUBLES.iter().any(|dbl| word.contains(dbl))
        && distinct_letters(word).len() >= 4
}

/// Rank fair answers by score and keep the best `pool_size`
///
/// Falls back to all of `words` when none is fair. Ties are broken
/// alphabetically so the pool is deterministic.
#[must_use]
pub fn rank_answers(words: &[String], pool_size: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = words
        .par_iter()
        .filter(|w| is_fair_answer(w))
        .map(|w| (score_word(w), w))
        .collect();

    if scored.is_empty() {
        return words.to_vec();
    }

    scored.par_sort_unstable_by(|(s1, w1), (s2, w2)| s2.total_cmp(s1).then_with(|| w1.cmp(w2)));
    scored
        .into_iter()
        .take(pool_size)
        .map(|(_, w)| w.clone())
        .collect()
}
