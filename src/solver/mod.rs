//! Hangman solving algorithms
//!
//! Candidate filtering, the guessing strategy and the turn driver.

pub mod candidates;
mod engine;
pub mod strategy;

pub use candidates::{CandidateSet, CandidateSetBuilder, LetterStat};
pub use engine::{GameRecord, SolveError, Turn, play, step};
pub use strategy::{FrequencyStrategy, GuessingStrategy, StrategyError};
