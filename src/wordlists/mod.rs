//! Word lists for the game
//!
//! Loading, filtering and curation of per-length guess and answer lists,
//! with fallback lists compiled into the binary.

mod bank;
pub mod blocklists;
pub mod curate;
pub mod embedded;
pub mod filter;
pub mod loader;

pub use bank::{
    BankError, DEFAULT_WORD_LENGTH, SUPPORTED_WORD_LENGTHS, SYSTEM_DICTIONARIES, WordBank,
    WordList, WordSource, WordSources, load_words_for_length,
};
pub use embedded::{FALLBACK_3, FALLBACK_4, FALLBACK_5, FALLBACK_6};
