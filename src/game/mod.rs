//! Game engine
//!
//! Session state, guess validation and the process-wide session store.

mod state;
mod store;

pub use state::{DEFAULT_MAX_GUESSES, GameError, GameState, GameStatus, GameView, GuessRecord};
pub use store::{SessionError, SessionStore, new_session_id};
