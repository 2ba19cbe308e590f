//! Turn driver
//!
//! Alternates between asking a strategy for a guess and applying it to the game
//! until the game is won or lost.

use super::strategy::{GuessingStrategy, StrategyError};
use crate::core::{GameError, GameStatus, GameView, Guess, HangmanGame, Pattern};
use std::fmt;

/// Error type for a game that could not be played to the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Game(GameError),
    Strategy(StrategyError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(err) => write!(f, "Game error: {err}"),
            Self::Strategy(err) => write!(f, "Strategy error: {err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Game(err) => Some(err),
            Self::Strategy(err) => Some(err),
        }
    }
}

impl From<GameError> for SolveError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<StrategyError> for SolveError {
    fn from(err: StrategyError) -> Self {
        Self::Strategy(err)
    }
}

/// One turn of a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub pattern_before: Pattern,
    pub pattern_after: Pattern,
    /// Candidates the strategy considered when choosing the guess
    pub candidates: usize,
    /// Whether the guess revealed something
    pub hit: bool,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub turns: Vec<Turn>,
    pub status: GameStatus,
    pub score: usize,
    pub wrong_guesses: usize,
}

impl GameRecord {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Play a single turn: ask the strategy for a guess and apply it
///
/// # Errors
/// Returns `SolveError` if the strategy has no guess or the game rejects it
/// (for instance because it is already over).
pub fn step<S: GuessingStrategy>(
    game: &mut HangmanGame,
    strategy: &mut S,
) -> Result<Turn, SolveError> {
    log::debug!("{game}");
    let pattern_before = game.pattern().clone();
    let wrong_before = game.wrong_guesses_made();

    let guess = strategy.next_guess(&*game)?;
    let candidates = strategy.remaining();
    log::debug!("{guess} from {candidates} candidates");

    let pattern_after = guess.apply(game)?.clone();
    let hit = game.wrong_guesses_made() == wrong_before;

    Ok(Turn {
        guess,
        pattern_before,
        pattern_after,
        candidates,
        hit,
    })
}

/// Play the game to the end
///
/// # Errors
/// Returns `SolveError` if a turn fails; see [`step`].
///
/// # Examples
/// ```
/// use hangman_solver::core::HangmanGame;
/// use hangman_solver::solver::{FrequencyStrategy, play};
///
/// let mut game = HangmanGame::new("ankle", 5).unwrap();
/// let mut strategy = FrequencyStrategy::from_words(5, ["APPLE", "ANGLE", "ANKLE"]);
///
/// let record = play(&mut game, &mut strategy).unwrap();
/// assert!(record.won());
/// ```
pub fn play<S: GuessingStrategy>(
    game: &mut HangmanGame,
    strategy: &mut S,
) -> Result<GameRecord, SolveError> {
    let mut turns = Vec::new();
    while game.status() == GameStatus::KeepGuessing {
        turns.push(step(game, strategy)?);
    }
    log::debug!("{game}");

    Ok(GameRecord {
        secret: game.secret().to_string(),
        turns,
        status: game.status(),
        score: game.score(),
        wrong_guesses: game.wrong_guesses_made(),
    })
}
