//! A single guess: one letter or the whole word

use super::{GameError, HangmanGame, Pattern};
use std::fmt;

/// A guess produced by a strategy and applied by the turn driver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Guess one letter (uppercase ASCII)
    Letter(u8),
    /// Guess the whole secret word (uppercase ASCII)
    Word(String),
}

impl Guess {
    /// Apply this guess to a game
    ///
    /// # Errors
    /// Propagates `GameError` from the game, e.g. when it is already over.
    pub fn apply<'g>(&self, game: &'g mut HangmanGame) -> Result<&'g Pattern, GameError> {
        match self {
            Self::Letter(letter) => game.guess_letter(char::from(*letter)),
            Self::Word(word) => game.guess_word(word),
        }
    }

    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "GuessLetter[{}]", char::from(*letter)),
            Self::Word(word) => write!(f, "GuessWord[{word}]"),
        }
    }
}
