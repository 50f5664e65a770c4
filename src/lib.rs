//! Wordle Server
//!
//! A kid-friendly Wordle-style word game served over HTTP, with per-length
//! word banks and session-scoped games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_server::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("apply", 5).unwrap();
//! let answer = Word::new("apple", 5).unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &answer).unwrap();
//! assert_eq!(feedback.verdicts()[4], Verdict::Absent);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// HTTP front end and JSON API
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
