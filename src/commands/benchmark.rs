//! Benchmark command
//!
//! Plays a random sample of dictionary words and reports score statistics.

use super::solve::solve_word;
use crate::solver::SolveError;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub total_score: usize,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    /// Games per score, ascending by score
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

/// Run benchmark on `count` random words
///
/// Words are drawn without replacement from the dictionary, or only from words
/// of `length` letters when given. Fewer games are played if the pool is
/// smaller than `count`.
///
/// # Errors
/// Returns `SolveError` if a game cannot be played to the end.
pub fn run_benchmark<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    max_wrong_guesses: usize,
    count: usize,
    length: Option<usize>,
    rng: &mut R,
) -> Result<BenchmarkResult, SolveError> {
    let pool: Vec<&str> = match length {
        Some(len) => dictionary
            .words_of_length(len)
            .iter()
            .map(String::as_str)
            .collect(),
        None => dictionary.iter().collect(),
    };

    let start = Instant::now();
    let mut wins = 0;
    let mut total_score = 0;
    let mut min_score = usize::MAX;
    let mut max_score = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in pool.choose_multiple(rng, count) {
        let record = solve_word(secret, dictionary, max_wrong_guesses)?;
        if record.won() {
            wins += 1;
        }
        total_score += record.score;
        min_score = min_score.min(record.score);
        max_score = max_score.max(record.score);
        *distribution.entry(record.score).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words: usize = distribution.values().sum();
    if total_words == 0 {
        min_score = 0;
    }
    let (average_score, words_per_second) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        (
            total_score as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    Ok(BenchmarkResult {
        total_words,
        wins,
        total_score,
        average_score,
        min_score,
        max_score,
        distribution,
        duration,
        words_per_second,
    })
}
