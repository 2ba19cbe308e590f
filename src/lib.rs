//! Hangman Solver
//!
//! Plays Hangman by guessing the letter that occurs most often among the
//! dictionary words still consistent with the game, and switches to whole-word
//! guesses once the answer is pinned down.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::HangmanGame;
//! use hangman_solver::solver::{FrequencyStrategy, play};
//! use hangman_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut game = HangmanGame::new("apple", 5).unwrap();
//! let mut strategy = FrequencyStrategy::new(game.secret_len(), &dictionary);
//!
//! let record = play(&mut game, &mut strategy).unwrap();
//! println!("{} = {}", record.secret, record.score);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
