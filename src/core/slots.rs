//! Answer slots
//!
//! One slot per letter of the target word. A slot is empty, holds a tile id,
//! or is locked (holds a tile id confirmed correct). Invalid gestures such as
//! placing into a full row or removing a locked tile are silent no-ops.

use super::{TileId, TilePool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSlots {
    slots: Vec<Option<TileId>>,
    locked: Vec<bool>,
}

impl AnswerSlots {
    /// Create `len` empty, unlocked slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
            locked: vec![false; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Tile ids per slot
    #[must_use]
    pub fn slots(&self) -> &[Option<TileId>] {
        &self.slots
    }

    /// Lock flags per slot
    #[must_use]
    pub fn locked(&self) -> &[bool] {
        &self.locked
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<TileId> {
        self.slots.get(index).copied().flatten()
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// First empty and unlocked slot, in ascending order
    #[must_use]
    pub fn first_open(&self) -> Option<usize> {
        self.slots
            .iter()
            .zip(&self.locked)
            .position(|(slot, &locked)| slot.is_none() && !locked)
    }

    /// Last slot whose tile the user may take back
    #[must_use]
    pub fn last_removable(&self) -> Option<usize> {
        (0..self.len())
            .rev()
            .find(|&i| self.slots[i].is_some() && !self.locked[i])
    }

    /// Place a tile into the first open slot
    ///
    /// Returns the slot index, or `None` when nothing changed: the tile is
    /// unknown or already used, or no slot is open.
    pub fn place(&mut self, pool: &mut TilePool, tile: TileId) -> Option<usize> {
        if pool.get(tile).is_none() || pool.is_used(tile) {
            return None;
        }
        let index = self.first_open()?;
        self.slots[index] = Some(tile);
        pool.set_used(tile, true);
        Some(index)
    }

    /// Take a tile back out of an unlocked slot
    ///
    /// Returns the released tile, or `None` for locked, empty or
    /// out-of-range slots.
    pub fn remove(&mut self, pool: &mut TilePool, index: usize) -> Option<TileId> {
        if self.is_locked(index) {
            return None;
        }
        let tile = self.slots.get_mut(index)?.take()?;
        pool.set_used(tile, false);
        Some(tile)
    }

    /// Letters currently spelled, with `None` for empty slots
    #[must_use]
    pub fn letters(&self, pool: &TilePool) -> Vec<Option<u8>> {
        self.slots
            .iter()
            .map(|slot| slot.and_then(|id| pool.letter(id)))
            .collect()
    }

    /// Concatenation of the filled slots' letters
    #[must_use]
    pub fn attempt(&self, pool: &TilePool) -> String {
        self.letters(pool)
            .into_iter()
            .flatten()
            .map(char::from)
            .collect()
    }

    pub(crate) fn lock(&mut self, index: usize) {
        if let Some(flag) = self.locked.get_mut(index) {
            *flag = true;
        }
    }

    /// Empty a slot regardless of its lock; callers must check the lock
    pub(crate) fn clear(&mut self, index: usize) -> Option<TileId> {
        self.slots.get_mut(index)?.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileOrigin;

    fn pool(letters: &str) -> TilePool {
        TilePool::from_letters(letters.bytes().map(|b| (b, TileOrigin::Filler)))
    }

    #[test]
    fn place_fills_slots_in_order() {
        let mut pool = pool("tac");
        let mut slots = AnswerSlots::new(3);

        assert_eq!(slots.place(&mut pool, TileId::new(2)), Some(0));
        assert_eq!(slots.place(&mut pool, TileId::new(1)), Some(1));
        assert_eq!(slots.place(&mut pool, TileId::new(0)), Some(2));

        assert!(slots.is_full());
        assert_eq!(slots.attempt(&pool), "cat");
        assert!(pool.tiles().iter().all(|t| t.used));
    }

    #[test]
    fn place_ignores_used_and_unknown_tiles() {
        let mut pool = pool("ab");
        let mut slots = AnswerSlots::new(2);

        assert_eq!(slots.place(&mut pool, TileId::new(0)), Some(0));
        assert_eq!(slots.place(&mut pool, TileId::new(0)), None);
        assert_eq!(slots.place(&mut pool, TileId::new(9)), None);
        assert_eq!(slots.get(1), None);
    }

    #[test]
    fn place_is_noop_when_row_is_full() {
        let mut pool = pool("abc");
        let mut slots = AnswerSlots::new(2);
        slots.place(&mut pool, TileId::new(0));
        slots.place(&mut pool, TileId::new(1));

        assert_eq!(slots.place(&mut pool, TileId::new(2)), None);
        assert!(!pool.is_used(TileId::new(2)));
    }

    #[test]
    fn place_skips_locked_empty_slots() {
        let mut pool = pool("ab");
        let mut slots = AnswerSlots::new(2);
        slots.lock(0);

        assert_eq!(slots.place(&mut pool, TileId::new(1)), Some(1));
        assert_eq!(slots.first_open(), None);
    }

    #[test]
    fn remove_releases_tile() {
        let mut pool = pool("ab");
        let mut slots = AnswerSlots::new(2);
        slots.place(&mut pool, TileId::new(0));
        slots.place(&mut pool, TileId::new(1));

        assert_eq!(slots.remove(&mut pool, 0), Some(TileId::new(0)));
        assert!(!pool.is_used(TileId::new(0)));
        assert_eq!(slots.first_open(), Some(0));

        // Freed slot is reused before later ones
        assert_eq!(slots.place(&mut pool, TileId::new(0)), Some(0));
    }

    #[test]
    fn remove_is_noop_for_locked_empty_or_missing_slots() {
        let mut pool = pool("ab");
        let mut slots = AnswerSlots::new(2);
        slots.place(&mut pool, TileId::new(0));
        slots.lock(0);

        assert_eq!(slots.remove(&mut pool, 0), None);
        assert!(pool.is_used(TileId::new(0)));
        assert_eq!(slots.remove(&mut pool, 1), None);
        assert_eq!(slots.remove(&mut pool, 5), None);
    }

    #[test]
    fn last_removable_skips_locked() {
        let mut pool = pool("abc");
        let mut slots = AnswerSlots::new(3);
        slots.place(&mut pool, TileId::new(0));
        slots.place(&mut pool, TileId::new(1));
        slots.lock(1);

        assert_eq!(slots.last_removable(), Some(0));
    }

    #[test]
    fn attempt_skips_empty_slots() {
        let mut pool = pool("ca");
        let mut slots = AnswerSlots::new(3);
        slots.place(&mut pool, TileId::new(0));
        slots.place(&mut pool, TileId::new(1));

        assert_eq!(slots.letters(&pool), vec![Some(b'c'), Some(b'a'), None]);
        assert_eq!(slots.attempt(&pool), "ca");
    }
}
