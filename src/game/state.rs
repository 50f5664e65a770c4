//! Per-session game state
//!
//! A [`GameState`] owns the secret answer and the guesses made so far. Guesses
//! are validated against the session's word list before scoring.

use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordList;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Reasons a guess is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    AlreadyFinished,
    InvalidLength(usize),
    NotInWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinished => write!(f, "Game is already finished. Start a new game."),
            Self::InvalidLength(len) => write!(f, "Guesses must be exactly {len} letters."),
            Self::NotInWordList => write!(f, "Guess must be a valid word from the list."),
        }
    }
}

impl std::error::Error for GameError {}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    pub word: String,
    pub result: Feedback,
}

/// Client-facing snapshot of a game
///
/// The answer is only revealed once the game is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: String,
    pub status: GameStatus,
    pub max_guesses: usize,
    pub word_length: usize,
    pub guesses: Vec<GuessRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct GameState {
    id: String,
    answer: Word,
    word_list: Arc<WordList>,
    max_guesses: usize,
    guesses: Vec<GuessRecord>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with a known answer
    ///
    /// # Errors
    /// Returns `WordError` if `answer` is not a valid word of the list's
    /// length.
    pub fn new(
        id: impl Into<String>,
        answer: &str,
        word_list: Arc<WordList>,
        max_guesses: usize,
    ) -> Result<Self, WordError> {
        let answer = Word::new(answer, word_list.word_length())?;
        Ok(Self {
            id: id.into(),
            answer,
            word_list,
            max_guesses,
            guesses: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.answer.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Score a guess and advance the game
    ///
    /// The guess is trimmed and lower-cased. Checks run in order: finished
    /// game, then length and letters, then word list membership.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or the guess is not playable.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_server::game::{GameState, GameStatus};
    /// use wordle_server::wordlists::{WordList, WordSource};
    ///
    /// let guesses = ["apple", "apply"].iter().map(|w| w.to_string()).collect();
    /// let list = WordList::new(5, guesses, vec!["apple".into()], WordSource::Embedded).unwrap();
    /// let mut game = GameState::new("demo", "apple", Arc::new(list), 6).unwrap();
    ///
    /// game.apply_guess("APPLY").unwrap();
    /// let view = game.apply_guess("apple").unwrap();
    /// assert_eq!(view.status, GameStatus::Won);
    /// assert_eq!(view.answer.as_deref(), Some("apple"));
    /// ```
    pub fn apply_guess(&mut self, guess: &str) -> Result<GameView, GameError> {
        if self.status.is_finished() {
            return Err(GameError::AlreadyFinished);
        }

        let length = self.word_length();
        let guess = match Word::new(guess, length) {
            Ok(word) => word,
            // Accented letters pass the letter check but are never listed
            Err(WordError::NonAscii) if is_foreign_word(guess, length) => {
                return Err(GameError::NotInWordList);
            }
            Err(_) => return Err(GameError::InvalidLength(length)),
        };
        if !self.word_list.is_allowed_guess(guess.text()) {
            return Err(GameError::NotInWordList);
        }

        let result = Feedback::calculate(&guess, &self.answer)
            .map_err(|_| GameError::InvalidLength(length))?;
        let solved = result.is_solved();
        self.guesses.push(GuessRecord {
            word: guess.text().to_string(),
            result,
        });

        if solved {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
        }

        Ok(self.view())
    }

    /// Snapshot for the client
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            id: self.id.clone(),
            status: self.status,
            max_guesses: self.max_guesses,
            word_length: self.word_length(),
            guesses: self.guesses.clone(),
            answer: self
                .status
                .is_finished()
                .then(|| self.answer.text().to_string()),
        }
    }
}

/// `length` alphabetic characters, at least one of them outside ASCII
fn is_foreign_word(guess: &str, length: usize) -> bool {
    let guess = guess.trim();
    guess.chars().count() == length && guess.chars().all(char::is_alphabetic)
}
