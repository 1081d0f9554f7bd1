//! Core domain types for spelling practice
//!
//! Words, letter tiles and answer slots. These types know nothing about
//! randomness, rounds or presentation.

mod slots;
mod tile;
mod word;

pub use slots::AnswerSlots;
pub use tile::{Tile, TileId, TileOrigin, TilePool};
pub use word::{Word, WordError};
