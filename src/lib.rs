//! Spelling Tiles
//!
//! Spelling practice with spoken prompts and a letter-tile puzzle: each word
//! is rebuilt from a shuffled pool of its own letters plus distractors, and
//! correct positions lock in after every attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_tiles::core::Word;
//! use spelling_tiles::practice::{Command, PracticeConfig, Response, Session, SubmitOutcome};
//! use spelling_tiles::speech::SilentAnnouncer;
//!
//! let words = vec![Word::new("cat").unwrap()];
//! let mut session = Session::begin(&words, PracticeConfig::default().with_seed(7)).unwrap();
//!
//! for letter in *b"cat" {
//!     session.dispatch(Command::PlaceLetter(letter), &mut SilentAnnouncer);
//! }
//! let response = session.dispatch(Command::Submit, &mut SilentAnnouncer);
//! assert_eq!(response, Response::Submitted(SubmitOutcome::Correct { first_try: true }));
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Tile generation, evaluation, rounds and sessions
pub mod practice;

// Spoken prompts
pub mod speech;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
