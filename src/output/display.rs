//! Display functions for command results

use super::formatters::{format_count, rule};
use crate::commands::CurationOutcome;
use crate::wordlists::WordBank;
use colored::Colorize;

/// Print the loaded word lists and where the game is served
pub fn print_bank_summary(bank: &WordBank, address: &str) {
    println!("\n{}", rule(60).cyan());
    println!(" {} ", "WORDLE SERVER".bright_cyan().bold());
    println!("{}", rule(60).cyan());

    println!("\n📚 {}", "Word lists:".bright_cyan().bold());
    for length in bank.lengths() {
        let Some(list) = bank.get(length) else {
            continue;
        };
        println!(
            "   {length} letters: {} answers, {} guesses ({})",
            format_count(list.answers().len()).bright_yellow(),
            format_count(list.guesses().len()),
            list.source().to_string().bright_black()
        );
    }

    println!(
        "\n🌐 Serving on {}",
        format!("http://{address}").green().bold()
    );
}

/// Print the files written by a curation run
pub fn print_curation_result(outcomes: &[CurationOutcome]) {
    println!("\n{}", rule(60).cyan());
    println!(" {} ", "CURATED WORD LISTS".bright_cyan().bold());
    println!("{}", rule(60).cyan());

    for outcome in outcomes {
        println!(
            "\n{} {}",
            format!("{} letters:", outcome.word_length).bright_cyan().bold(),
            if outcome.answer_count == 0 {
                "no answers".red().to_string()
            } else {
                String::new()
            }
        );
        println!(
            "   Guesses: {:>8}  → {}",
            format_count(outcome.guess_count).bright_yellow(),
            outcome.guess_path.display()
        );
        println!(
            "   Answers: {:>8}  → {}",
            format_count(outcome.answer_count).green(),
            outcome.answer_path.display()
        );
    }
}
