//! Word list curation command
//!
//! Reads local dictionary, frequency, profanity and name files and writes
//! curated guess and answer lists for the requested lengths.

use crate::wordlists::curate::{
    CURATED_LENGTHS, CuratedList, CurationInputs, CurationSources, curate, write_curated,
};
use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::path::PathBuf;

/// Configuration for a curation run
#[derive(Debug, Clone)]
pub struct CurateConfig {
    pub inputs: CurationInputs,
    pub out_dir: PathBuf,
    pub lengths: Vec<usize>,
}

/// Files written for one length
#[derive(Debug, Clone)]
pub struct CurationOutcome {
    pub word_length: usize,
    pub guess_count: usize,
    pub answer_count: usize,
    pub guess_path: PathBuf,
    pub answer_path: PathBuf,
}

impl CurationOutcome {
    fn new(list: &CuratedList, guess_path: PathBuf, answer_path: PathBuf) -> Self {
        Self {
            word_length: list.word_length,
            guess_count: list.guesses.len(),
            answer_count: list.answers.len(),
            guess_path,
            answer_path,
        }
    }
}

/// Curate and write every requested length
///
/// # Errors
/// Returns an error if no dictionary is given, a length cannot be curated,
/// an input file cannot be read, or an output file cannot be written.
pub fn run_curate(config: &CurateConfig) -> Result<Vec<CurationOutcome>> {
    if config.inputs.dictionaries.is_empty() {
        bail!("at least one dictionary file is required");
    }
    if let Some(&length) = config
        .lengths
        .iter()
        .find(|len| !CURATED_LENGTHS.contains(len))
    {
        bail!("cannot curate {length}-letter words (supported: {CURATED_LENGTHS:?})");
    }

    let sources = CurationSources::load(&config.inputs).context("Failed to read curation inputs")?;
    info!(
        "Loaded {} dictionaries, {} ranked words, {} blocked words, {} names",
        sources.dictionaries.len(),
        sources.frequency_rank.len(),
        sources.blocked.len(),
        sources.names.len()
    );
    if sources.frequency_rank.is_empty() {
        warn!("No frequency list given; answers will be empty");
    }

    let mut outcomes = Vec::with_capacity(config.lengths.len());
    for &length in &config.lengths {
        let Some(list) = curate(&sources, length) else {
            bail!("no thresholds for {length}-letter words");
        };
        if list.answers.is_empty() {
            warn!("No {length}-letter answers survived curation");
        }
        let (guess_path, answer_path) = write_curated(&config.out_dir, &list)
            .with_context(|| format!("Failed to write {}", config.out_dir.display()))?;
        info!(
            "Wrote {} guesses and {} answers for length {length}",
            list.guesses.len(),
            list.answers.len()
        );
        outcomes.push(CurationOutcome::new(&list, guess_path, answer_path));
    }
    Ok(outcomes)
}
