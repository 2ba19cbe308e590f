//! Core domain types for Hangman
//!
//! This module contains the game-facing types with zero external dependencies:
//! letter sets, revealed patterns, the game state and guesses.

mod game;
mod guess;
mod letters;
mod pattern;

pub use game::{
    DEFAULT_MAX_WRONG_GUESSES, GameError, GameStatus, GameView, HangmanGame, LOST_GAME_SCORE,
};
pub use guess::Guess;
pub use letters::LetterSet;
pub use pattern::{MYSTERY_LETTER, Pattern, PatternError};
