//! Letter tiles and the per-round tile arena
//!
//! Tiles are referenced everywhere by [`TileId`]. The id is assigned once, when
//! the pool is built, and equals the tile's index in the arena.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Stable identifier of a tile within one round's pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a tile's letter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOrigin {
    /// Copied from the target word at this character position
    Word(usize),
    /// Random distractor
    Filler,
}

/// A single letter tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub letter: u8,
    pub id: TileId,
    pub used: bool,
    pub origin: TileOrigin,
}

impl Tile {
    #[inline]
    #[must_use]
    pub fn letter_char(&self) -> char {
        char::from(self.letter)
    }
}

/// Arena of tiles for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Build a pool from `(letter, origin)` pairs in their final order
    ///
    /// Ids are assigned as the 0-based position of each entry.
    #[must_use]
    pub fn from_letters(letters: impl IntoIterator<Item = (u8, TileOrigin)>) -> Self {
        let tiles = letters
            .into_iter()
            .enumerate()
            .map(|(index, (letter, origin))| Tile {
                letter,
                id: TileId::new(index),
                used: false,
                origin,
            })
            .collect();
        Self { tiles }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Letter of a tile, if the id exists
    #[must_use]
    pub fn letter(&self, id: TileId) -> Option<u8> {
        self.get(id).map(|tile| tile.letter)
    }

    #[must_use]
    pub fn is_used(&self, id: TileId) -> bool {
        self.get(id).is_some_and(|tile| tile.used)
    }

    /// Set the `used` flag; unknown ids are ignored
    pub(crate) fn set_used(&mut self, id: TileId, used: bool) {
        if let Some(tile) = self.tiles.get_mut(id.index()) {
            tile.used = used;
        }
    }

    /// First unused tile carrying `letter`, lowest id first
    #[must_use]
    pub fn find_unused(&self, letter: u8) -> Option<TileId> {
        self.tiles
            .iter()
            .find(|tile| !tile.used && tile.letter == letter)
            .map(|tile| tile.id)
    }

    /// Tiles that were copied from the target word
    pub fn word_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile.origin, TileOrigin::Word(_)))
    }

    /// Check that every letter of `word` is represented by a word tile
    #[must_use]
    pub fn covers(&self, word: &Word) -> bool {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for tile in self.word_tiles() {
            *counts.entry(tile.letter).or_insert(0) += 1;
        }
        counts == word.letter_counts()
    }
}
