//! Display functions for the line-based frontend and word commands

use super::formatters::{feedback_message, locks_line, slots_line, summary_message, tiles_line};
use crate::core::Word;
use crate::practice::{Session, SubmitOutcome};
use colored::Colorize;

/// Print the current round: progress, tiles and answer row
pub fn print_round(session: &Session) {
    let progress = session.progress();
    let Some(round) = session.round() else {
        return;
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word {} of {}   Score: {}",
        progress.current.to_string().bright_yellow().bold(),
        progress.total,
        progress.score.to_string().green()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nTiles:  {}", tiles_line(round.pool()));
    println!(
        "\nAnswer: {}",
        slots_line(round.slots(), round.pool()).bright_white().bold()
    );
    println!("        {}", locks_line(round.slots()).bright_black());
}

/// Print feedback for a submission
pub fn print_feedback(outcome: &SubmitOutcome) {
    let Some(message) = feedback_message(outcome) else {
        return;
    };
    match outcome {
        SubmitOutcome::Correct { .. } => println!("\n{}", message.green().bold()),
        _ => println!("\n{}", message.yellow()),
    }
}

/// Print the end-of-session summary
pub fn print_summary(session: &Session) {
    if let Some(summary) = session.summary() {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!("  {}", summary_message(&summary).bright_green().bold());
        println!("{}", "═".repeat(60).bright_cyan());
    }
}

/// Print the word list, numbered from 1
pub fn print_word_list(words: &[Word]) {
    if words.is_empty() {
        println!("{}", "No words yet. Add some!".bright_black());
        return;
    }
    println!("\n📚 {} ({})", "Spelling words".bright_cyan().bold(), words.len());
    for (i, word) in words.iter().enumerate() {
        println!("   {:>3}. {}", (i + 1).to_string().bright_black(), word);
    }
}
