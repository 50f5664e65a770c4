//! Core domain types for the game
//!
//! Words and per-letter verdicts. Nothing here knows about sessions, word
//! banks or HTTP.

mod verdict;
mod word;

pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError};
