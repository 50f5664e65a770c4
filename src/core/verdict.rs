//! Per-letter guess feedback
//!
//! Each position of a guess receives one [`Verdict`]:
//! - `Correct`: letter in the correct position
//! - `Present`: letter in the answer, wrong position
//! - `Absent`: letter not in the answer (or all copies already accounted for)
//!
//! [`Feedback`] is the ordered sequence of verdicts for one guess.

use super::{Word, WordError};
use serde::{Deserialize, Serialize};

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Score `guess` against `answer`
    ///
    /// Implements the exact game rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the answer's
    ///    remaining letter pool
    /// 2. Second pass: mark remaining positions `Present` while the pool still
    ///    holds that letter, otherwise `Absent`
    ///
    /// A letter guessed more often than it occurs in the answer therefore gets
    /// at most that many non-absent marks, with exact matches served first.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_server::core::{Feedback, Verdict, Word};
    ///
    /// let answer = Word::new("apple", 5).unwrap();
    /// let guess = Word::new("apply", 5).unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Absent,
    ///     ]
    /// );
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, WordError> {
        if guess.len() != answer.len() {
            return Err(WordError::InvalidLength {
                expected: answer.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![Verdict::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Verdict::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}
