//! Process-wide session store
//!
//! Games are keyed by an opaque session id and live for the life of the
//! process. The map is sharded, so requests for different sessions do not
//! contend; a guess holds its entry's lock while it is scored.

use super::state::{GameError, GameState, GameView};
use crate::wordlists::WordBank;
use dashmap::DashMap;
use log::debug;
use rand::Rng;
use std::fmt;

/// Reasons a session operation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    UnsupportedLength(usize),
    NotFound,
    Game(GameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(_) => write!(f, "Unsupported word length"),
            Self::NotFound => write!(f, "No active game"),
            Self::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

/// Random 128-bit id in UUID version 4 text form
#[must_use]
pub fn new_session_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bits: u128 = rng.random();
    // Version nibble, then RFC 4122 variant bits
    bits = (bits & !(0xF_u128 << 76)) | (0x4_u128 << 76);
    bits = (bits & !(0x3_u128 << 62)) | (0x2_u128 << 62);
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        bits >> 96,
        (bits >> 80) & 0xFFFF,
        (bits >> 64) & 0xFFFF,
        (bits >> 48) & 0xFFFF,
        bits & 0xFFFF_FFFF_FFFF
    )
}

/// All games known to this process
pub struct SessionStore {
    games: DashMap<String, GameState>,
    bank: WordBank,
    max_guesses: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(bank: WordBank, max_guesses: usize) -> Self {
        Self {
            games: DashMap::new(),
            bank,
            max_guesses,
        }
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Start a new game with a random answer
    ///
    /// # Errors
    /// Returns `SessionError::UnsupportedLength` if the bank has no list for
    /// `word_length`.
    pub fn create(&self, word_length: usize) -> Result<GameView, SessionError> {
        self.create_with_rng(word_length, &mut rand::rng())
    }

    /// Start a new game, drawing the id and answer from `rng`
    ///
    /// # Errors
    /// Returns `SessionError::UnsupportedLength` if the bank has no list for
    /// `word_length`.
    pub fn create_with_rng<R: Rng + ?Sized>(
        &self,
        word_length: usize,
        rng: &mut R,
    ) -> Result<GameView, SessionError> {
        let list = self
            .bank
            .get(word_length)
            .ok_or(SessionError::UnsupportedLength(word_length))?;
        let id = new_session_id(rng);
        let answer = list.pick_answer(rng).to_string();

        // Bank answers are validated on load, so this only fails on a
        // corrupted list
        let game = GameState::new(id.clone(), &answer, list, self.max_guesses)
            .map_err(|_| SessionError::UnsupportedLength(word_length))?;
        let view = game.view();
        self.games.insert(id, game);
        Ok(view)
    }

    /// Current view of a game
    ///
    /// # Errors
    /// Returns `SessionError::NotFound` for an unknown id.
    pub fn snapshot(&self, id: &str) -> Result<GameView, SessionError> {
        self.games
            .get(id)
            .map(|game| game.view())
            .ok_or(SessionError::NotFound)
    }

    /// Submit a guess to a game
    ///
    /// # Errors
    /// Returns `SessionError::NotFound` for an unknown id, or
    /// `SessionError::Game` if the guess is rejected.
    pub fn guess(&self, id: &str, word: &str) -> Result<GameView, SessionError> {
        let mut game = self.games.get_mut(id).ok_or(SessionError::NotFound)?;
        let view = game.apply_guess(word)?;
        if let Some(last) = view.guesses.last() {
            debug!(
                "Session {id} guess {}/{}: {} ({} correct, {} present)",
                view.guesses.len(),
                view.max_guesses,
                last.result.to_emoji(),
                last.result.count_correct(),
                last.result.count_present()
            );
        }
        Ok(view)
    }

    /// Number of games created so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::{WordList, WordSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use std::thread;

    fn store() -> SessionStore {
        let mut bank = WordBank::default();
        let guesses = ["apple", "apply", "crane"]
            .iter()
            .map(|&w| w.to_string())
            .collect();
        bank.insert(
            WordList::new(5, guesses, vec!["apple".to_string()], WordSource::Embedded).unwrap(),
        );
        SessionStore::new(bank, 6)
    }

    #[test]
    fn session_ids_look_like_uuid_v4() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = new_session_id(&mut rng);
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(id.len(), 36);
        assert_eq!(
            parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(parts[2].starts_with('4'));
        assert!(matches!(parts[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b'));
        assert_ne!(id, new_session_id(&mut rng));
    }

    #[test]
    fn create_then_snapshot() {
        let store = store();
        let view = store.create(5).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot(&view.id).unwrap(), view);
        assert_eq!(store.snapshot(&view.id).unwrap(), store.snapshot(&view.id).unwrap());
    }

    #[test]
    fn create_unsupported_length() {
        let store = store();
        assert_eq!(store.create(4), Err(SessionError::UnsupportedLength(4)));
        assert!(store.is_empty());
    }

    #[test]
    fn guess_updates_stored_game() {
        let store = store();
        let id = store.create(5).unwrap().id;

        let view = store.guess(&id, "apply").unwrap();
        assert_eq!(view.guesses.len(), 1);
        assert_eq!(store.snapshot(&id).unwrap(), view);

        let view = store.guess(&id, "apple").unwrap();
        assert_eq!(view.status, GameStatus::Won);
        assert_eq!(
            store.guess(&id, "apple"),
            Err(SessionError::Game(GameError::AlreadyFinished))
        );
    }

    #[test]
    fn unknown_session() {
        let store = store();
        assert_eq!(store.snapshot("missing"), Err(SessionError::NotFound));
        assert_eq!(store.guess("missing", "apple"), Err(SessionError::NotFound));
    }

    #[test]
    fn concurrent_sessions_are_independent() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let id = store.create(5).unwrap().id;
                    store.guess(&id, "crane").unwrap();
                    store.snapshot(&id).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let view = handle.join().unwrap();
            assert_eq!(view.guesses.len(), 1);
        }
        assert_eq!(store.len(), 8);
    }
}
