//! Practice engine
//!
//! Tile generation, attempt evaluation, and the round and session state
//! machines built on top of them.

mod config;
pub mod evaluator;
pub mod generator;
mod round;
mod session;

pub use config::{
    DEFAULT_POOL_MULTIPLIER, DEFAULT_VOWEL_PROBABILITY, MAX_POOL_MULTIPLIER, PoolConfig,
    PracticeConfig,
};
pub use evaluator::{Evaluation, evaluate};
pub use generator::generate_tiles;
pub use round::{Round, RoundPhase, SubmitOutcome};
pub use session::{
    Advance, Command, PracticeError, Progress, Response, Session, SessionSummary,
};
