//! Game server command
//!
//! Loads the word bank, then serves the front end and JSON API.

use crate::game::SessionStore;
use crate::output::print_bank_summary;
use crate::server::{self, ServerConfig};
use crate::wordlists::{WordBank, WordSources};
use anyhow::{Context, Result, bail};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for the game server
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub server: ServerConfig,
    pub wordlist_dir: PathBuf,
    pub max_guesses: usize,
}

/// Build the session store from the configured word lists
///
/// # Errors
/// Returns an error if `max_guesses` is zero or a word length ends up
/// without any words.
pub fn prepare_store(config: &ServeConfig) -> Result<SessionStore> {
    if config.max_guesses == 0 {
        bail!("max guesses must be at least 1");
    }
    let sources = WordSources::new(&config.wordlist_dir);
    let bank = WordBank::load(&sources).context("Failed to load word lists")?;
    Ok(SessionStore::new(bank, config.max_guesses))
}

/// Load word lists and serve until the process exits
///
/// # Errors
/// Returns an error if the word lists cannot be loaded or the address
/// cannot be bound.
pub fn run_serve(config: &ServeConfig) -> Result<()> {
    let store = prepare_store(config)?;
    print_bank_summary(store.bank(), &config.server.address());

    if !config.server.static_dir.is_dir() {
        info!(
            "Static directory {} not found; only the API will respond",
            config.server.static_dir.display()
        );
    }
    server::run(&config.server, Arc::new(store))
}
