//! Simple interactive CLI mode
//!
//! Line-based practice without the TUI

use crate::core::TileId;
use crate::output::{print_feedback, print_round, print_summary};
use crate::practice::{Advance, Command, Response, Session};
use crate::speech::Announcer;
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Commands(Vec<Command>),
    Help,
    Quit,
}

/// Parse a line of input
///
/// Numbers place tiles by id, `-N` empties answer slot N (1-based), words
/// like `submit` or `next` are commands, and anything else alphabetic is
/// typed letter by letter.
#[must_use]
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim().to_lowercase();
    let input = match line.as_str() {
        "" => return None,
        "quit" | "exit" => Input::Quit,
        "help" | "?" => Input::Help,
        "submit" | "." => Input::Commands(vec![Command::Submit]),
        "next" => Input::Commands(vec![Command::Next]),
        "hear" | "!" => Input::Commands(vec![Command::Hear]),
        "again" => Input::Commands(vec![Command::PlayAgain]),
        "undo" | "<" => Input::Commands(vec![Command::RemoveLast]),
        other => {
            if let Some(slot) = other.strip_prefix('-') {
                let slot: usize = slot.parse().ok()?;
                Input::Commands(vec![Command::RemoveTile(slot.checked_sub(1)?)])
            } else if let Ok(id) = other.parse::<usize>() {
                Input::Commands(vec![Command::PlaceTile(TileId::new(id))])
            } else if other.bytes().all(|b| b.is_ascii_lowercase()) {
                Input::Commands(other.bytes().map(Command::PlaceLetter).collect())
            } else {
                return None;
            }
        }
    };
    Some(input)
}

fn print_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  <letters>   place tiles with those letters, e.g. 'cat'");
    println!("  <number>    place the tile with that number");
    println!("  -<n>        take the tile out of answer slot n");
    println!("  undo, <     take back the last tile");
    println!("  submit, .   check your answer");
    println!("  hear, !     hear the word again");
    println!("  next        go to the next word");
    println!("  again       start over once every word is done");
    println!("  quit        leave practice\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session, announcer: &mut dyn Announcer) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Tiles - Practice Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Listen to the word, then build it from the tiles. Type 'help' for commands.");

    session.dispatch(Command::Hear, announcer);
    print_round(&session);

    loop {
        let prompt = if session.is_complete() {
            "Type 'again' to play again or 'quit'"
        } else if session.round().is_some_and(|r| r.is_solved()) {
            "Type 'next' for the next word"
        } else {
            "Your move"
        };

        let Some(input) = parse_input(&get_user_input(prompt)?) else {
            println!("{}", "Unrecognised input. Type 'help' for commands.".red());
            continue;
        };

        let commands = match input {
            Input::Quit => {
                println!("\n👋 Thanks for practising!\n");
                return Ok(());
            }
            Input::Help => {
                print_help();
                continue;
            }
            Input::Commands(commands) => commands,
        };

        let mut changed = false;
        for command in commands {
            match session.dispatch(command, announcer) {
                Response::Submitted(outcome) => {
                    print_feedback(&outcome);
                    changed = true;
                }
                Response::Advanced(Advance::Finished(_)) => {
                    print_summary(&session);
                }
                Response::Advanced(Advance::NextWord) | Response::Restarted => {
                    session.dispatch(Command::Hear, announcer);
                    changed = true;
                }
                Response::Placed { .. } | Response::Removed { .. } => changed = true,
                Response::Announced => {}
                Response::Ignored => {
                    println!("{}", "Nothing to do there.".bright_black());
                }
            }
        }

        if changed {
            print_round(&session);
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
