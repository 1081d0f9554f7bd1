//! Tile pool generation
//!
//! A pool holds the target word's letters plus random distractors, shuffled
//! together. Filler letters are biased towards consonants so the pool looks
//! like plausible English rather than uniform noise.

use super::PoolConfig;
use crate::core::{TileOrigin, TilePool, Word};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Filler vowel class
pub const VOWELS: &[u8] = b"aeiou";

/// Filler consonant class
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Draw one filler letter: a weighted coin picks the class, then a uniform
/// choice within it
pub fn random_filler<R: Rng + ?Sized>(rng: &mut R, vowel_probability: f64) -> u8 {
    let class = if rng.random_bool(vowel_probability) {
        VOWELS
    } else {
        CONSONANTS
    };
    class[rng.random_range(0..class.len())]
}

/// Generate a shuffled tile pool for `word`
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spelling_tiles::core::Word;
/// use spelling_tiles::practice::{PoolConfig, generate_tiles};
///
/// let word = Word::new("cat").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let pool = generate_tiles(&word, &PoolConfig::default(), &mut rng);
///
/// assert_eq!(pool.len(), 9);
/// assert!(pool.covers(&word));
/// ```
pub fn generate_tiles<R: Rng + ?Sized>(word: &Word, config: &PoolConfig, rng: &mut R) -> TilePool {
    let mut letters: Vec<(u8, TileOrigin)> = Vec::with_capacity(config.pool_size(word.len()));

    letters.extend(
        word.letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| (letter, TileOrigin::Word(position))),
    );

    for _ in 0..config.filler_count(word.len()) {
        letters.push((
            random_filler(rng, config.vowel_probability),
            TileOrigin::Filler,
        ));
    }

    letters.shuffle(rng);

    let pool = TilePool::from_letters(letters);
    debug_assert!(pool.covers(word));
    debug!("generated {} tiles for '{word}'", pool.len());
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn pool_size_is_three_times_word_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for text in ["a", "cat", "rabbit", "umbrella"] {
            let w = word(text);
            let pool = generate_tiles(&w, &PoolConfig::default(), &mut rng);
            assert_eq!(pool.len(), 3 * w.len(), "pool size for '{text}'");
        }
    }

    #[test]
    fn word_letters_are_fully_represented() {
        let mut rng = StdRng::seed_from_u64(2);
        for text in ["letter", "bookkeeper", "zzz", "mississippi"] {
            let w = word(text);
            for _ in 0..20 {
                let pool = generate_tiles(&w, &PoolConfig::default(), &mut rng);
                assert!(pool.covers(&w), "pool must cover '{text}'");
                assert_eq!(pool.word_tiles().count(), w.len());
            }
        }
    }

    #[test]
    fn ids_are_positions_and_tiles_start_unused() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = generate_tiles(&word("garden"), &PoolConfig::default(), &mut rng);
        for (index, tile) in pool.tiles().iter().enumerate() {
            assert_eq!(tile.id.index(), index);
            assert!(!tile.used);
        }
    }

    #[test]
    fn word_tiles_are_scrambled() {
        // Over many generations the first tile must not always be the first letter
        let mut rng = StdRng::seed_from_u64(4);
        let w = word("pencil");
        let aligned = (0..50)
            .filter(|_| {
                let pool = generate_tiles(&w, &PoolConfig::default(), &mut rng);
                pool.tiles()[0].origin == TileOrigin::Word(0)
            })
            .count();
        assert!(aligned < 50);
    }

    #[test]
    fn fillers_are_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = generate_tiles(&word("island"), &PoolConfig::default(), &mut rng);
        assert!(pool.tiles().iter().all(|t| t.letter.is_ascii_lowercase()));
    }

    #[test]
    fn vowel_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            assert!(VOWELS.contains(&random_filler(&mut rng, 1.0)));
            assert!(CONSONANTS.contains(&random_filler(&mut rng, 0.0)));
        }
    }

    #[test]
    fn filler_bias_is_roughly_thirty_percent_vowels() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: u32 = 10_000;
        let vowels = (0..draws)
            .filter(|_| VOWELS.contains(&random_filler(&mut rng, 0.3)))
            .count();
        let ratio = vowels as f64 / f64::from(draws);
        assert!((0.25..0.35).contains(&ratio), "vowel ratio {ratio}");
    }

    #[test]
    fn custom_multiplier_changes_pool_size() {
        let mut rng = StdRng::seed_from_u64(8);
        let w = word("dog");
        let pool = generate_tiles(&w, &PoolConfig::new(1, 0.3), &mut rng);
        assert_eq!(pool.len(), 3);
        assert!(pool.covers(&w));

        let pool = generate_tiles(&w, &PoolConfig::new(5, 0.3), &mut rng);
        assert_eq!(pool.len(), 15);
    }
}
