//! Hangman game state
//!
//! Holds the secret word, the revealed pattern and the guess history, and
//! computes the score and status. The solver only sees the game through
//! [`GameView`], which never exposes the secret word.

use super::{LetterSet, Pattern};
use std::fmt;

/// Score charged for a lost game, regardless of how many guesses were made
pub const LOST_GAME_SCORE: usize = 25;

/// Wrong guesses allowed when none is configured
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 5;

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Won,
    Lost,
    KeepGuessing,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "GAME_WON"),
            Self::Lost => write!(f, "GAME_LOST"),
            Self::KeepGuessing => write!(f, "KEEP_GUESSING"),
        }
    }
}

/// Error type for invalid game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was made after the game ended
    NotInProgress(GameStatus),
    /// The secret word is empty or contains non-letters
    InvalidSecret(String),
    /// A letter guess that isn't an ASCII letter
    InvalidLetter(char),
    /// A word guess that is empty or contains non-letters
    InvalidWord(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInProgress(status) => {
                write!(f, "Cannot keep guessing in current game state: {status}")
            }
            Self::InvalidSecret(word) => {
                write!(f, "Secret word must be non-empty ASCII letters, got '{word}'")
            }
            Self::InvalidLetter(ch) => write!(f, "Guess must be an ASCII letter, got '{ch}'"),
            Self::InvalidWord(word) => {
                write!(f, "Word guess must be non-empty ASCII letters, got '{word}'")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Read-only view of a game, as seen by a guessing strategy
pub trait GameView {
    /// The letters guessed so far, with mystery markers for unknown positions
    fn pattern(&self) -> &Pattern;

    /// Every letter guessed so far, correct or not
    fn guessed_letters(&self) -> LetterSet;

    /// Whole-word guesses that were wrong (no duplicates)
    fn incorrect_words(&self) -> &[String];

    /// Wrong guesses still allowed before the game is lost
    fn wrong_guesses_remaining(&self) -> usize;
}

/// A single game of Hangman
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: String,
    max_wrong_guesses: usize,
    revealed: Pattern,
    correct_letters: LetterSet,
    incorrect_letters: LetterSet,
    incorrect_words: Vec<String>,
}

impl HangmanGame {
    /// Start a new game
    ///
    /// The secret word is normalized to uppercase. `max_wrong_guesses` is the
    /// number of wrong letter/word guesses allowed; exceeding it loses the game.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the word is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GameStatus, GameView, HangmanGame};
    ///
    /// let mut game = HangmanGame::new("apple", 5).unwrap();
    /// assert_eq!(game.pattern().to_string(), "-----");
    ///
    /// game.guess_letter('p').unwrap();
    /// assert_eq!(game.pattern().to_string(), "-PP--");
    /// assert_eq!(game.status(), GameStatus::KeepGuessing);
    /// ```
    pub fn new(secret: &str, max_wrong_guesses: usize) -> Result<Self, GameError> {
        let secret = secret.trim().to_ascii_uppercase();
        if secret.is_empty() || !secret.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GameError::InvalidSecret(secret));
        }

        Ok(Self {
            revealed: Pattern::mystery(secret.len()),
            secret,
            max_wrong_guesses,
            correct_letters: LetterSet::new(),
            incorrect_letters: LetterSet::new(),
            incorrect_words: Vec::new(),
        })
    }

    /// Guess a letter and update the game state
    ///
    /// Returns the updated pattern. Guessing a letter twice is not penalized twice.
    ///
    /// # Errors
    /// Returns `GameError::NotInProgress` if the game is already won or lost, or
    /// `GameError::InvalidLetter` if `letter` is not an ASCII letter.
    pub fn guess_letter(&mut self, letter: char) -> Result<&Pattern, GameError> {
        self.assert_can_keep_guessing()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase() as u8;

        if self.revealed.reveal(self.secret.as_bytes(), letter) {
            self.correct_letters.insert(letter);
        } else {
            self.incorrect_letters.insert(letter);
        }

        Ok(&self.revealed)
    }

    /// Guess the whole word and update the game state
    ///
    /// Returns the updated pattern, fully revealed on a correct guess.
    ///
    /// # Errors
    /// Returns `GameError::NotInProgress` if the game is already won or lost, or
    /// `GameError::InvalidWord` if the guess is not made of ASCII letters.
    pub fn guess_word(&mut self, word: &str) -> Result<&Pattern, GameError> {
        self.assert_can_keep_guessing()?;
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord(word));
        }

        if word == self.secret {
            self.revealed.reveal_all(self.secret.as_bytes());
        } else if !self.incorrect_words.contains(&word) {
            self.incorrect_words.push(word);
        }

        Ok(&self.revealed)
    }

    fn assert_can_keep_guessing(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::KeepGuessing => Ok(()),
            status => Err(GameError::NotInProgress(status)),
        }
    }

    /// Current status of the game
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.revealed.cells() == self.secret.as_bytes() {
            GameStatus::Won
        } else if self.wrong_guesses_made() > self.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }

    /// Score for the current state (lower is better)
    ///
    /// Wrong guesses plus distinct correct letters while the game is won or in
    /// progress, [`LOST_GAME_SCORE`] once it is lost.
    #[must_use]
    pub fn score(&self) -> usize {
        match self.status() {
            GameStatus::Lost => LOST_GAME_SCORE,
            _ => self.wrong_guesses_made() + self.correct_letters.len(),
        }
    }

    /// Number of wrong letter and word guesses made so far
    #[must_use]
    pub fn wrong_guesses_made(&self) -> usize {
        self.incorrect_letters.len() + self.incorrect_words.len()
    }

    /// Number of wrong guesses allowed in total
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    /// Letters that revealed at least one position
    #[must_use]
    pub const fn correct_letters(&self) -> LetterSet {
        self.correct_letters
    }

    /// Letters that revealed nothing
    #[must_use]
    pub const fn incorrect_letters(&self) -> LetterSet {
        self.incorrect_letters
    }

    /// Length of the secret word
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// The secret word
    ///
    /// For the turn driver and the UI; strategies see the game through
    /// [`GameView`] only.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl GameView for HangmanGame {
    fn pattern(&self) -> &Pattern {
        &self.revealed
    }

    fn guessed_letters(&self) -> LetterSet {
        self.correct_letters.union(self.incorrect_letters)
    }

    fn incorrect_words(&self) -> &[String] {
        &self.incorrect_words
    }

    fn wrong_guesses_remaining(&self) -> usize {
        self.max_wrong_guesses
            .saturating_sub(self.wrong_guesses_made())
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.revealed,
            self.score(),
            self.status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_all_mystery() {
        let game = HangmanGame::new("apple", 5).unwrap();
        assert_eq!(game.secret(), "APPLE");
        assert_eq!(game.pattern().to_string(), "-----");
        assert_eq!(game.status(), GameStatus::KeepGuessing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.wrong_guesses_remaining(), 5);
        assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn new_game_rejects_invalid_secret() {
        assert!(matches!(
            HangmanGame::new("", 5),
            Err(GameError::InvalidSecret(_))
        ));
        assert!(matches!(
            HangmanGame::new("ice cream", 5),
            Err(GameError::InvalidSecret(_))
        ));
        assert!(HangmanGame::new("r2d2", 5).is_err());
    }

    #[test]
    fn correct_letter_reveals_all_positions() {
        let mut game = HangmanGame::new("APPLE", 5).unwrap();
        let pattern = game.guess_letter('p').unwrap();
        assert_eq!(pattern.to_string(), "-PP--");
        assert_eq!(game.correct_letters(), LetterSet::from("P"));
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn wrong_letter_counts_once() {
        let mut game = HangmanGame::new("APPLE", 5).unwrap();
        game.guess_letter('Z').unwrap();
        game.guess_letter('z').unwrap();

        assert_eq!(game.incorrect_letters(), LetterSet::from("Z"));
        assert_eq!(game.wrong_guesses_made(), 1);
        assert_eq!(game.wrong_guesses_remaining(), 4);
    }

    #[test]
    fn invalid_letter_rejected() {
        let mut game = HangmanGame::new("APPLE", 5).unwrap();
        assert_eq!(game.guess_letter('-'), Err(GameError::InvalidLetter('-')));
        assert_eq!(game.wrong_guesses_made(), 0);
    }

    #[test]
    fn wrong_word_recorded_without_touching_letters() {
        let mut game = HangmanGame::new("CAT", 5).unwrap();
        game.guess_letter('T').unwrap();
        game.guess_word("bat").unwrap();
        game.guess_word("BAT").unwrap(); // Duplicate does not count twice

        assert_eq!(game.incorrect_words(), &["BAT".to_string()]);
        assert_eq!(game.guessed_letters(), LetterSet::from("T"));
        assert_eq!(game.wrong_guesses_made(), 1);
        assert_eq!(game.pattern().to_string(), "--T");
    }

    #[test]
    fn correct_word_wins() {
        let mut game = HangmanGame::new("CAT", 5).unwrap();
        game.guess_letter('A').unwrap();
        let pattern = game.guess_word("cat").unwrap();
        assert_eq!(pattern.to_string(), "CAT");
        assert_eq!(game.status(), GameStatus::Won);
        // One correct letter, no wrong guesses
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn revealing_every_letter_wins() {
        let mut game = HangmanGame::new("DOG", 5).unwrap();
        for letter in ['D', 'O', 'G'] {
            game.guess_letter(letter).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn exceeding_max_wrong_loses() {
        let mut game = HangmanGame::new("DOG", 2).unwrap();
        game.guess_letter('A').unwrap();
        game.guess_letter('B').unwrap();
        assert_eq!(game.status(), GameStatus::KeepGuessing);
        assert_eq!(game.wrong_guesses_remaining(), 0);

        game.guess_word("CAT").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), LOST_GAME_SCORE);
    }

    #[test]
    fn guessing_after_game_over_fails() {
        let mut game = HangmanGame::new("DOG", 0).unwrap();
        game.guess_letter('X').unwrap();
        assert_eq!(game.status(), GameStatus::Lost);

        assert_eq!(
            game.guess_letter('D'),
            Err(GameError::NotInProgress(GameStatus::Lost))
        );

        let mut won = HangmanGame::new("DOG", 5).unwrap();
        won.guess_word("DOG").unwrap();
        assert_eq!(
            won.guess_word("DOG"),
            Err(GameError::NotInProgress(GameStatus::Won))
        );
    }

    #[test]
    fn display_format() {
        let mut game = HangmanGame::new("APPLE", 5).unwrap();
        game.guess_letter('A').unwrap();
        assert_eq!(game.to_string(), "A----; score=1; status=KEEP_GUESSING");
    }
}
