//! Position analysis command
//!
//! Builds the candidate set for an arbitrary game position and reports the
//! letter ranking and the guess the strategy would make from there.

use crate::core::{GameView, Guess, LetterSet, Pattern, PatternError};
use crate::solver::{
    CandidateSet, FrequencyStrategy, GuessingStrategy, LetterStat, StrategyError,
};
use crate::wordlists::Dictionary;

/// A game position described by hand rather than by a running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pattern: Pattern,
    guessed: LetterSet,
    incorrect_words: Vec<String>,
    wrong_guesses_remaining: usize,
}

impl Position {
    /// Describe a position
    ///
    /// Letters revealed in the pattern count as guessed. Wrong guesses are the
    /// guessed letters missing from the pattern plus the wrong words.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is empty or malformed.
    pub fn new(
        pattern: &str,
        guessed: &str,
        incorrect_words: &[String],
        max_wrong_guesses: usize,
    ) -> Result<Self, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        let revealed = pattern.revealed_letters();
        let guessed = LetterSet::from(guessed).union(revealed);

        let mut words: Vec<String> = incorrect_words
            .iter()
            .map(|w| w.trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let misses = guessed.iter().filter(|&l| !revealed.contains(l)).count();
        let wrong_guesses_remaining = max_wrong_guesses.saturating_sub(misses + words.len());

        Ok(Self {
            pattern,
            guessed,
            incorrect_words: words,
            wrong_guesses_remaining,
        })
    }
}

impl GameView for Position {
    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    fn incorrect_words(&self) -> &[String] {
        &self.incorrect_words
    }

    fn wrong_guesses_remaining(&self) -> usize {
        self.wrong_guesses_remaining
    }
}

/// Result of analyzing a position
pub struct AnalysisResult {
    pub position: Position,
    pub candidates: CandidateSet,
    pub next_guess: Result<Guess, StrategyError>,
}

impl AnalysisResult {
    /// The `n` highest ranked letters
    #[must_use]
    pub fn top_letters(&self, n: usize) -> &[LetterStat] {
        let ranking = self.candidates.ranking();
        &ranking[..n.min(ranking.len())]
    }
}

/// Analyze a position against the dictionary words of matching length
#[must_use]
pub fn analyze_position(position: Position, dictionary: &Dictionary) -> AnalysisResult {
    let mut strategy = FrequencyStrategy::new(position.pattern().len(), dictionary);
    let next_guess = strategy.next_guess(&position);

    AnalysisResult {
        candidates: strategy.candidates().clone(),
        position,
        next_guess,
    }
}
