//! Tunables for tile generation and session randomness

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default pool size as a multiple of word length
pub const DEFAULT_POOL_MULTIPLIER: usize = 3;

/// Largest accepted pool multiplier
pub const MAX_POOL_MULTIPLIER: usize = 10;

/// Default chance that a filler tile is a vowel
pub const DEFAULT_VOWEL_PROBABILITY: f64 = 0.3;

/// Tile pool sizing and filler letter bias
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolConfig {
    /// Pool holds `multiplier × word.len()` tiles
    pub multiplier: usize,
    /// Probability of drawing a filler from the vowel class
    pub vowel_probability: f64,
}

impl PoolConfig {
    /// Create a config, clamping values into their legal ranges
    ///
    /// The multiplier is kept within `1..=MAX_POOL_MULTIPLIER` (1 means no
    /// fillers) and the probability is clamped to `[0, 1]`; NaN falls back
    /// to the default.
    #[must_use]
    pub fn new(multiplier: usize, vowel_probability: f64) -> Self {
        let vowel_probability = if vowel_probability.is_nan() {
            DEFAULT_VOWEL_PROBABILITY
        } else {
            vowel_probability.clamp(0.0, 1.0)
        };
        Self {
            multiplier: multiplier.clamp(1, MAX_POOL_MULTIPLIER),
            vowel_probability,
        }
    }

    /// Total tiles for a word of `word_len` letters
    #[inline]
    #[must_use]
    pub const fn pool_size(&self, word_len: usize) -> usize {
        word_len.saturating_mul(self.multiplier)
    }

    /// Filler tiles for a word of `word_len` letters
    #[inline]
    #[must_use]
    pub const fn filler_count(&self, word_len: usize) -> usize {
        self.pool_size(word_len).saturating_sub(word_len)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_MULTIPLIER, DEFAULT_VOWEL_PROBABILITY)
    }
}

/// Everything a practice session needs besides the word list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PracticeConfig {
    pub pool: PoolConfig,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl PracticeConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session RNG
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_constants() {
        let config = PoolConfig::default();
        assert_eq!(config.multiplier, 3);
        assert!((config.vowel_probability - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.pool_size(4), 12);
        assert_eq!(config.filler_count(4), 8);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        let config = PoolConfig::new(0, 1.7);
        assert_eq!(config.multiplier, 1);
        assert!((config.vowel_probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.filler_count(5), 0);

        let config = PoolConfig::new(2, -0.5);
        assert!(config.vowel_probability.abs() < f64::EPSILON);

        let config = PoolConfig::new(2, f64::NAN);
        assert!((config.vowel_probability - DEFAULT_VOWEL_PROBABILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_multiplier_is_capped() {
        let config = PoolConfig::new(usize::MAX, 0.3);
        assert_eq!(config.multiplier, MAX_POOL_MULTIPLIER);
        assert_eq!(config.pool_size(4), 4 * MAX_POOL_MULTIPLIER);

        let unchecked = PoolConfig {
            multiplier: usize::MAX,
            vowel_probability: 0.3,
        };
        assert_eq!(unchecked.pool_size(2), usize::MAX);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = PracticeConfig::default().with_seed(42);
        let mut first = config.rng();
        let mut second = config.rng();
        assert_eq!(first.random::<u64>(), second.random::<u64>());
        assert_eq!(config.seed, Some(42));
    }
}
