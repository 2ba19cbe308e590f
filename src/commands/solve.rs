//! Word solving command
//!
//! Plays one game against a known secret and returns the full turn history.

use crate::core::HangmanGame;
use crate::solver::{FrequencyStrategy, GameRecord, SolveError, play};
use crate::wordlists::Dictionary;

/// Solve a secret word with a fresh frequency strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is empty or contains non-letters
/// - The strategy runs out of guesses (the secret is not in the dictionary)
pub fn solve_word(
    secret: &str,
    dictionary: &Dictionary,
    max_wrong_guesses: usize,
) -> Result<GameRecord, SolveError> {
    let mut game = HangmanGame::new(secret, max_wrong_guesses)?;
    let mut strategy = FrequencyStrategy::new(game.secret_len(), dictionary);
    play(&mut game, &mut strategy)
}
