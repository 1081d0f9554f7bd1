//! Practice session: a shuffled queue of rounds and a first-try score
//!
//! Frontends drive a session exclusively through [`Session::dispatch`], one
//! [`Command`] per user gesture.

use super::{PoolConfig, PracticeConfig, Round, SubmitOutcome};
use crate::core::{TileId, Word};
use crate::speech::Announcer;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Reasons a session cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    #[error("Add some words first!")]
    NoWords,
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Words solved on the first submission
    pub score: usize,
    pub total: usize,
}

/// Read-only progress snapshot for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current word
    pub current: usize,
    pub total: usize,
    pub score: usize,
    pub complete: bool,
}

/// What `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextWord,
    Finished(SessionSummary),
}

/// A user gesture forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A pool tile was clicked
    PlaceTile(TileId),
    /// A letter key was typed
    PlaceLetter(u8),
    /// A filled answer slot was clicked
    RemoveTile(usize),
    /// Take back the last removable tile
    RemoveLast,
    Submit,
    Next,
    PlayAgain,
    Hear,
}

/// Effect of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Placed { slot: usize },
    Removed { tile: TileId },
    Submitted(SubmitOutcome),
    Advanced(Advance),
    Restarted,
    Announced,
    /// The command was not applicable and changed nothing
    Ignored,
}

#[derive(Debug, Clone)]
enum SessionPhase {
    Practicing(Round),
    Complete(SessionSummary),
}

/// A running practice session
#[derive(Debug, Clone)]
pub struct Session {
    source: Vec<Word>,
    queue: Vec<Word>,
    current_index: usize,
    score: usize,
    phase: SessionPhase,
    pool_config: PoolConfig,
    rng: StdRng,
}

impl Session {
    /// Shuffle `words` into a queue and start the first round
    ///
    /// # Errors
    /// Returns `PracticeError::NoWords` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use spelling_tiles::core::Word;
    /// use spelling_tiles::practice::{PracticeConfig, PracticeError, Session};
    ///
    /// let words = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
    /// let session = Session::begin(&words, PracticeConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(session.progress().total, 2);
    ///
    /// assert_eq!(
    ///     Session::begin(&[], PracticeConfig::default()).unwrap_err(),
    ///     PracticeError::NoWords
    /// );
    /// ```
    pub fn begin(words: &[Word], config: PracticeConfig) -> Result<Self, PracticeError> {
        if words.is_empty() {
            return Err(PracticeError::NoWords);
        }

        let mut rng = config.rng();
        let mut queue = words.to_vec();
        queue.shuffle(&mut rng);
        let round = Round::start(queue[0].clone(), &config.pool, &mut rng);

        info!("practice session started with {} words", queue.len());

        Ok(Self {
            source: words.to_vec(),
            queue,
            current_index: 0,
            score: 0,
            phase: SessionPhase::Practicing(round),
            pool_config: config.pool,
            rng,
        })
    }

    /// Words in practice order
    #[must_use]
    pub fn queue(&self) -> &[Word] {
        &self.queue
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// The active round, `None` once the session is complete
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            SessionPhase::Practicing(round) => Some(round),
            SessionPhase::Complete(_) => None,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::Complete(_))
    }

    /// Final score, once complete
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        match self.phase {
            SessionPhase::Complete(summary) => Some(summary),
            SessionPhase::Practicing(_) => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            current: (self.current_index + 1).min(self.total()),
            total: self.total(),
            score: self.score,
            complete: self.is_complete(),
        }
    }

    fn round_mut(&mut self) -> Option<&mut Round> {
        match &mut self.phase {
            SessionPhase::Practicing(round) => Some(round),
            SessionPhase::Complete(_) => None,
        }
    }

    /// Submit the current answer, scoring a first-try solve
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(round) = self.round_mut() else {
            return SubmitOutcome::Ignored;
        };
        let outcome = round.submit();
        if outcome == (SubmitOutcome::Correct { first_try: true }) {
            self.score += 1;
        }
        outcome
    }

    /// Move past a solved round
    ///
    /// Returns `None` while the current round is unsolved or after the
    /// session has finished.
    pub fn advance(&mut self) -> Option<Advance> {
        if !self.round()?.is_solved() {
            return None;
        }

        self.current_index += 1;
        if self.current_index >= self.queue.len() {
            let summary = SessionSummary {
                score: self.score,
                total: self.queue.len(),
            };
            info!(
                "practice session complete: {} of {} on the first try",
                summary.score, summary.total
            );
            self.phase = SessionPhase::Complete(summary);
            return Some(Advance::Finished(summary));
        }

        let word = self.queue[self.current_index].clone();
        self.phase = SessionPhase::Practicing(Round::start(word, &self.pool_config, &mut self.rng));
        Some(Advance::NextWord)
    }

    /// Reshuffle the original word list and start over
    ///
    /// Only a complete session can be restarted; returns false otherwise.
    pub fn play_again(&mut self) -> bool {
        if !self.is_complete() {
            return false;
        }
        self.queue.clone_from(&self.source);
        self.queue.shuffle(&mut self.rng);
        self.current_index = 0;
        self.score = 0;
        let word = self.queue[0].clone();
        self.phase = SessionPhase::Practicing(Round::start(word, &self.pool_config, &mut self.rng));
        info!("practice session restarted");
        true
    }

    /// Apply one user gesture
    pub fn dispatch(&mut self, command: Command, announcer: &mut dyn Announcer) -> Response {
        match command {
            Command::PlaceTile(tile) => self
                .round_mut()
                .and_then(|round| round.place_tile(tile))
                .map_or(Response::Ignored, |slot| Response::Placed { slot }),
            Command::PlaceLetter(letter) => self
                .round_mut()
                .and_then(|round| round.place_letter(letter))
                .map_or(Response::Ignored, |slot| Response::Placed { slot }),
            Command::RemoveTile(slot) => self
                .round_mut()
                .and_then(|round| round.remove_tile(slot))
                .map_or(Response::Ignored, |tile| Response::Removed { tile }),
            Command::RemoveLast => self
                .round_mut()
                .and_then(Round::remove_last)
                .map_or(Response::Ignored, |tile| Response::Removed { tile }),
            Command::Submit => match self.submit() {
                SubmitOutcome::Ignored => Response::Ignored,
                outcome => Response::Submitted(outcome),
            },
            Command::Next => self.advance().map_or(Response::Ignored, Response::Advanced),
            Command::PlayAgain => {
                if self.play_again() {
                    Response::Restarted
                } else {
                    Response::Ignored
                }
            }
            Command::Hear => match self.round() {
                Some(round) => {
                    announcer.announce(round.word());
                    Response::Announced
                }
                None => Response::Ignored,
            },
        }
    }
}
