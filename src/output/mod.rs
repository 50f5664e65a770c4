//! Terminal output formatting
//!
//! Startup and command summaries for the console.

pub mod display;
pub mod formatters;

pub use display::{print_bank_summary, print_curation_result};
