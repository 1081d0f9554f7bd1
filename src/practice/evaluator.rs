//! Attempt evaluation with partial-credit locking
//!
//! A wrong submission is not thrown away: every filled slot whose letter
//! matches the target at that position is locked, every other filled slot is
//! emptied and its tile returned to the pool. Locked slots never unlock for
//! the rest of the round.

use crate::core::{AnswerSlots, TileId, TilePool, Word};
use log::debug;

/// Outcome of evaluating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Every slot filled and the attempt spells the word
    pub correct: bool,
    /// Lock flags after this submission
    pub locked: Vec<bool>,
    /// `(slot, tile)` pairs sent back to the pool
    pub released: Vec<(usize, TileId)>,
}

impl Evaluation {
    /// Tile ids released by this submission
    #[must_use]
    pub fn released_tile_ids(&self) -> Vec<TileId> {
        self.released.iter().map(|&(_, tile)| tile).collect()
    }

    /// Number of locked slots after this submission
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|&&locked| locked).count()
    }

    /// Write locks and releases back into the round state
    ///
    /// A correct evaluation changes nothing.
    pub fn apply(&self, pool: &mut TilePool, slots: &mut AnswerSlots) {
        if self.correct {
            return;
        }
        for (index, &locked) in self.locked.iter().enumerate() {
            if locked {
                slots.lock(index);
            }
        }
        for &(index, tile) in &self.released {
            if !slots.is_locked(index) && slots.clear(index).is_some() {
                pool.set_used(tile, false);
            }
        }
    }
}

/// Evaluate the current slots against `word` without mutating anything
///
/// # Examples
/// ```
/// use spelling_tiles::core::{AnswerSlots, TileId, TileOrigin, TilePool, Word};
/// use spelling_tiles::practice::evaluate;
///
/// let word = Word::new("cat").unwrap();
/// let mut pool = TilePool::from_letters(b"cot".iter().map(|&b| (b, TileOrigin::Filler)));
/// let mut slots = AnswerSlots::new(3);
/// for id in 0..3 {
///     slots.place(&mut pool, TileId::new(id));
/// }
///
/// let evaluation = evaluate(&word, &pool, &slots);
/// assert!(!evaluation.correct);
/// assert_eq!(evaluation.locked, vec![true, false, true]);
/// assert_eq!(evaluation.released_tile_ids(), vec![TileId::new(1)]);
/// ```
#[must_use]
pub fn evaluate(word: &Word, pool: &TilePool, slots: &AnswerSlots) -> Evaluation {
    let letters = slots.letters(pool);
    let correct = letters.len() == word.len()
        && letters
            .iter()
            .zip(word.letters())
            .all(|(slot, &expected)| *slot == Some(expected));

    if correct {
        return Evaluation {
            correct,
            locked: slots.locked().to_vec(),
            released: Vec::new(),
        };
    }

    let mut locked = slots.locked().to_vec();
    let mut released = Vec::new();

    for (index, (&expected, &letter)) in word.letters().iter().zip(&letters).enumerate() {
        let Some(tile) = slots.get(index) else {
            continue;
        };
        if letter == Some(expected) {
            locked[index] = true;
        } else if !locked[index] {
            released.push((index, tile));
        }
    }

    debug!(
        "attempt '{}' for '{word}': {} locked, {} released",
        slots.attempt(pool),
        locked.iter().filter(|&&l| l).count(),
        released.len()
    );

    Evaluation {
        correct,
        locked,
        released,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileOrigin;

    /// Pool whose tile ids spell `letters` in order
    fn pool(letters: &str) -> TilePool {
        TilePool::from_letters(letters.bytes().map(|b| (b, TileOrigin::Filler)))
    }

    fn fill(pool: &mut TilePool, len: usize, ids: &[usize]) -> AnswerSlots {
        let mut slots = AnswerSlots::new(len);
        for &id in ids {
            slots.place(pool, TileId::new(id));
        }
        slots
    }

    #[test]
    fn full_match_is_correct() {
        let word = Word::new("cat").unwrap();
        let mut pool = pool("cat");
        let slots = fill(&mut pool, 3, &[0, 1, 2]);

        let evaluation = evaluate(&word, &pool, &slots);
        assert!(evaluation.correct);
        assert!(evaluation.released.is_empty());
        assert_eq!(evaluation.locked, vec![false; 3]);
    }

    #[test]
    fn correct_evaluation_does_not_mutate() {
        let word = Word::new("cat").unwrap();
        let mut pool = pool("cat");
        let mut slots = fill(&mut pool, 3, &[0, 1, 2]);
        let before = (pool.clone(), slots.clone());

        evaluate(&word, &pool, &slots).apply(&mut pool, &mut slots);
        assert_eq!((pool, slots), before);
    }

    #[test]
    fn partial_fill_is_never_correct() {
        let word = Word::new("cat").unwrap();
        let mut pool = pool("ca");
        let slots = fill(&mut pool, 3, &[0, 1]);

        let evaluation = evaluate(&word, &pool, &slots);
        assert!(!evaluation.correct);
        assert_eq!(evaluation.locked, vec![true, true, false]);
        assert!(evaluation.released.is_empty());
    }

    #[test]
    fn empty_submission_locks_nothing() {
        let word = Word::new("cat").unwrap();
        let pool = pool("xyz");
        let slots = AnswerSlots::new(3);

        let evaluation = evaluate(&word, &pool, &slots);
        assert!(!evaluation.correct);
        assert_eq!(evaluation.locked_count(), 0);
        assert!(evaluation.released.is_empty());
    }

    #[test]
    fn mismatches_are_released_and_matches_locked() {
        let word = Word::new("cat").unwrap();
        let mut pool = pool("cot");
        let mut slots = fill(&mut pool, 3, &[0, 1, 2]);

        let evaluation = evaluate(&word, &pool, &slots);
        evaluation.apply(&mut pool, &mut slots);

        assert_eq!(slots.locked(), &[true, false, true]);
        assert_eq!(slots.get(1), None);
        assert!(!pool.is_used(TileId::new(1)));
        assert!(pool.is_used(TileId::new(0)));
        assert!(pool.is_used(TileId::new(2)));
        assert_eq!(slots.first_open(), Some(1));
    }

    #[test]
    fn same_letter_from_another_tile_still_matches() {
        // Matching is by letter, not by which tile carried it
        let word = Word::new("dad").unwrap();
        let mut pool = pool("dda");
        let mut slots = fill(&mut pool, 3, &[1, 2, 0]);

        let evaluation = evaluate(&word, &pool, &slots);
        assert!(evaluation.correct);
        evaluation.apply(&mut pool, &mut slots);
        assert_eq!(slots.attempt(&pool), "dad");
    }

    #[test]
    fn locks_survive_later_evaluations() {
        let word = Word::new("cat").unwrap();
        let mut pool = pool("cotxa");
        let mut slots = fill(&mut pool, 3, &[0, 1, 2]);
        evaluate(&word, &pool, &slots).apply(&mut pool, &mut slots);

        // Wrong again in the open slot
        slots.place(&mut pool, TileId::new(3));
        let evaluation = evaluate(&word, &pool, &slots);
        assert_eq!(evaluation.locked, vec![true, false, true]);
        evaluation.apply(&mut pool, &mut slots);
        assert_eq!(slots.get(0), Some(TileId::new(0)));
        assert_eq!(slots.get(2), Some(TileId::new(2)));

        // Nothing in the open slot: locks unchanged, nothing released
        let evaluation = evaluate(&word, &pool, &slots);
        assert!(evaluation.released.is_empty());
        assert_eq!(evaluation.locked, vec![true, false, true]);

        slots.place(&mut pool, TileId::new(4));
        assert!(evaluate(&word, &pool, &slots).correct);
    }

    #[test]
    fn swapped_letters_release_both() {
        let word = Word::new("at").unwrap();
        let mut pool = pool("ta");
        let slots = fill(&mut pool, 2, &[0, 1]);

        let evaluation = evaluate(&word, &pool, &slots);
        assert!(!evaluation.correct);
        assert_eq!(evaluation.released_tile_ids(), vec![TileId::new(0), TileId::new(1)]);
    }
}
