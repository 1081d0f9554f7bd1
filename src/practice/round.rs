//! One practice round: a single word from tile generation to solution

use super::{PoolConfig, evaluate, generate_tiles};
use crate::core::{AnswerSlots, TileId, TilePool, Word};
use rand::Rng;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting placements, removals and submissions
    AwaitingInput,
    /// Solved; only advancing to the next word is possible
    Solved,
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct { first_try: bool },
    Incorrect { locked: usize, released: Vec<TileId> },
    /// Round already solved
    Ignored,
}

/// State of the word currently being practised
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    pool: TilePool,
    slots: AnswerSlots,
    first_try: bool,
    phase: RoundPhase,
    attempts: usize,
}

impl Round {
    /// Generate tiles for `word` and wait for input
    pub fn start<R: Rng + ?Sized>(word: Word, config: &PoolConfig, rng: &mut R) -> Self {
        let pool = generate_tiles(&word, config, rng);
        Self::with_pool(word, pool)
    }

    /// Start a round on a prebuilt pool
    #[must_use]
    pub fn with_pool(word: Word, pool: TilePool) -> Self {
        let slots = AnswerSlots::new(word.len());
        Self {
            word,
            pool,
            slots,
            first_try: true,
            phase: RoundPhase::AwaitingInput,
            attempts: 0,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    #[must_use]
    pub const fn slots(&self) -> &AnswerSlots {
        &self.slots
    }

    /// Still no wrong submission this round
    #[must_use]
    pub const fn first_try(&self) -> bool {
        self.first_try
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == RoundPhase::Solved
    }

    /// Submissions made so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Put a tile into the first open slot
    pub fn place_tile(&mut self, tile: TileId) -> Option<usize> {
        if self.is_solved() {
            return None;
        }
        self.slots.place(&mut self.pool, tile)
    }

    /// Place the first unused tile carrying `letter`
    pub fn place_letter(&mut self, letter: u8) -> Option<usize> {
        let tile = self.pool.find_unused(letter.to_ascii_lowercase())?;
        self.place_tile(tile)
    }

    /// Take a tile back out of an unlocked slot
    pub fn remove_tile(&mut self, slot: usize) -> Option<TileId> {
        if self.is_solved() {
            return None;
        }
        self.slots.remove(&mut self.pool, slot)
    }

    /// Take back the right-most removable tile
    pub fn remove_last(&mut self) -> Option<TileId> {
        let slot = self.slots.last_removable()?;
        self.remove_tile(slot)
    }

    /// Evaluate the slots and apply locks or mark the round solved
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_solved() {
            return SubmitOutcome::Ignored;
        }
        self.attempts += 1;

        let evaluation = evaluate(&self.word, &self.pool, &self.slots);
        if evaluation.correct {
            self.phase = RoundPhase::Solved;
            return SubmitOutcome::Correct {
                first_try: self.first_try,
            };
        }

        self.first_try = false;
        evaluation.apply(&mut self.pool, &mut self.slots);
        SubmitOutcome::Incorrect {
            locked: evaluation.locked_count(),
            released: evaluation.released_tile_ids(),
        }
    }
}
