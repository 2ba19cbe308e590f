//! Guess selection strategies
//!
//! Defines the `GuessingStrategy` trait and the letter-frequency strategy.

use super::CandidateSet;
use crate::core::{GameView, Guess, LetterSet, Pattern};
use crate::wordlists::Dictionary;
use std::fmt;

/// A strategy for choosing the next guess in a Hangman game
pub trait GuessingStrategy {
    /// Choose the next guess for the current game state
    ///
    /// Must not assume the guess is applied; the turn driver does that.
    ///
    /// # Errors
    /// Returns `StrategyError` when no consistent guess exists.
    fn next_guess<G: GameView + ?Sized>(&mut self, game: &G) -> Result<Guess, StrategyError>;

    /// Number of candidate words the strategy is currently considering
    fn remaining(&self) -> usize;
}

/// Error type for a strategy that has run out of options
///
/// Either means the secret word is not in the dictionary the strategy was
/// given, or the game state contradicts itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// No candidate word matches the pattern
    NoCandidates { pattern: Pattern },
    /// Every letter in the candidate words has already been ruled out
    NoLetterAvailable { pattern: Pattern },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { pattern } => write!(
                f,
                "No dictionary word matches pattern {pattern} (is the secret word in the dictionary?)"
            ),
            Self::NoLetterAvailable { pattern } => {
                write!(f, "No unguessed letter left to try for pattern {pattern}")
            }
        }
    }
}

impl std::error::Error for StrategyError {}

/// Letter-frequency strategy
///
/// Keeps the set of dictionary words consistent with the game so far and
/// guesses the letter occurring most often in it. Switches to whole-word
/// guesses when one candidate remains, when only one blank is left, or when
/// the next wrong guess would lose the game anyway.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    candidates: CandidateSet,
}

impl FrequencyStrategy {
    /// Create a strategy for a secret word of `word_len` letters
    #[must_use]
    pub fn new(word_len: usize, dictionary: &Dictionary) -> Self {
        Self::from_words(
            word_len,
            dictionary.words_of_length(word_len).iter().map(String::as_str),
        )
    }

    /// Create a strategy from an arbitrary word source
    ///
    /// Words of other lengths are ignored.
    pub fn from_words<I, S>(word_len: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        let candidates = CandidateSet::build(Pattern::mystery(word_len), LetterSet::new(), words);
        log::debug!(
            "{} initial candidates of length {word_len}",
            candidates.len()
        );
        Self { candidates }
    }

    /// The candidate set held after the most recent turn
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Letters ruled out for the current turn
    ///
    /// Every guessed letter, plus, for each failed word guess, the letter it
    /// had at the first still-hidden position: that letter can't be the
    /// secret's letter there, even though it was never guessed as a letter.
    fn effective_exclusions<G: GameView + ?Sized>(game: &G) -> LetterSet {
        let mut excluded = game.guessed_letters();
        if let Some(idx) = game.pattern().first_mystery() {
            excluded.extend(
                game.incorrect_words()
                    .iter()
                    .filter_map(|word| word.as_bytes().get(idx).copied()),
            );
        }
        excluded
    }

    /// Rebuild the candidate set if the game moved on since it was built
    fn sync(&mut self, pattern: &Pattern, excluded: LetterSet) {
        if self.candidates.is_built_for(pattern, excluded) {
            return;
        }

        let before = self.candidates.len();
        let previous = std::mem::take(&mut self.candidates);
        self.candidates = previous.refine(pattern.clone(), excluded);
        log::debug!(
            "candidates {before} -> {} for {pattern} excluding {excluded}",
            self.candidates.len()
        );
    }

    fn first_candidate(&self, pattern: &Pattern) -> Result<Guess, StrategyError> {
        self.candidates
            .first()
            .map(|word| Guess::Word(word.to_string()))
            .ok_or_else(|| StrategyError::NoCandidates {
                pattern: pattern.clone(),
            })
    }
}

impl GuessingStrategy for FrequencyStrategy {
    fn next_guess<G: GameView + ?Sized>(&mut self, game: &G) -> Result<Guess, StrategyError> {
        let pattern = game.pattern();
        let guessed = game.guessed_letters();
        let excluded = Self::effective_exclusions(game);

        self.sync(pattern, excluded);

        if self.candidates.len() == 1 {
            return self.first_candidate(pattern);
        }

        match pattern.mystery_count() {
            0 => Ok(Guess::Word(pattern.to_string())),
            1 => {
                // One blank left: a correct letter would still need a turn to
                // confirm the word, so guess the word outright
                let letter = self.candidates.suggest(excluded).ok_or_else(|| {
                    StrategyError::NoLetterAvailable {
                        pattern: pattern.clone(),
                    }
                })?;
                Ok(Guess::Word(pattern.fill(letter)))
            }
            _ if game.wrong_guesses_remaining() == 0 => self.first_candidate(pattern),
            _ => self
                .candidates
                .suggest(guessed)
                .map(Guess::Letter)
                .ok_or_else(|| StrategyError::NoLetterAvailable {
                    pattern: pattern.clone(),
                }),
        }
    }

    fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl fmt::Display for FrequencyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrequencyStrategy[{}]", self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, HangmanGame};

    /// Fixed game snapshot for driving the strategy directly
    struct Snapshot {
        pattern: Pattern,
        guessed: LetterSet,
        wrong_words: Vec<String>,
        remaining: usize,
    }

    impl Snapshot {
        fn new(pattern: &str, guessed: &str) -> Self {
            Self {
                pattern: Pattern::parse(pattern).unwrap(),
                guessed: LetterSet::from(guessed),
                wrong_words: Vec::new(),
                remaining: 5,
            }
        }
    }

    impl GameView for Snapshot {
        fn pattern(&self) -> &Pattern {
            &self.pattern
        }

        fn guessed_letters(&self) -> LetterSet {
            self.guessed
        }

        fn incorrect_words(&self) -> &[String] {
            &self.wrong_words
        }

        fn wrong_guesses_remaining(&self) -> usize {
            self.remaining
        }
    }

    fn apply(guess: &Guess, game: &mut HangmanGame) {
        guess.apply(game).unwrap();
    }

    #[test]
    fn initial_candidates_use_matching_length() {
        let strategy = FrequencyStrategy::from_words(3, ["CAT", "DOG", "HORSE", "COW"]);
        assert_eq!(strategy.remaining(), 3);
        assert_eq!(strategy.candidates().pattern().to_string(), "---");
        assert!(strategy.candidates().excluded().is_empty());
    }

    #[test]
    fn apple_game_wins_after_one_miss() {
        let words = ["APPLE", "ANGLE", "ANKLE"];
        let mut game = HangmanGame::new("APPLE", 5).unwrap();
        let mut strategy = FrequencyStrategy::from_words(5, words);
        assert_eq!(strategy.remaining(), 3);

        // A, E, L tie on counts; alphabetical order picks A
        let guess = strategy.next_guess(&game).unwrap();
        assert_eq!(guess, Guess::Letter(b'A'));
        apply(&guess, &mut game);
        assert_eq!(game.pattern().to_string(), "A----");

        // Every word starts with A, so nothing is ruled out
        let guess = strategy.next_guess(&game).unwrap();
        assert_eq!(strategy.remaining(), 3);
        assert_eq!(guess, Guess::Letter(b'E'));
        apply(&guess, &mut game);

        let guess = strategy.next_guess(&game).unwrap();
        assert_eq!(guess, Guess::Letter(b'L'));
        apply(&guess, &mut game);
        assert_eq!(game.pattern().to_string(), "A--LE");

        // N (2, 2) outranks P (2, 1) and misses
        let guess = strategy.next_guess(&game).unwrap();
        assert_eq!(guess, Guess::Letter(b'N'));
        apply(&guess, &mut game);

        let guess = strategy.next_guess(&game).unwrap();
        assert_eq!(strategy.remaining(), 1);
        assert_eq!(guess, Guess::Word("APPLE".to_string()));
        apply(&guess, &mut game);

        assert_eq!(game.status(), GameStatus::Won);
        // Three correct letters plus one miss
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn never_suggests_a_guessed_letter() {
        let words = ["APPLE", "ANGLE", "ANKLE"];
        for secret in words {
            let mut game = HangmanGame::new(secret, 5).unwrap();
            let mut strategy = FrequencyStrategy::from_words(5, words);

            while game.status() == GameStatus::KeepGuessing {
                let guessed = game.guessed_letters();
                let guess = strategy.next_guess(&game).unwrap();
                if let Guess::Letter(letter) = guess {
                    assert!(!guessed.contains(letter), "{secret}: re-suggested {letter}");
                }
                apply(&guess, &mut game);
            }
        }
    }

    #[test]
    fn guessed_letter_filters_hidden_positions() {
        let snapshot = Snapshot::new("C-T", "ACT");
        let mut strategy = FrequencyStrategy::from_words(3, ["CAT", "COT", "CUT"]);

        let guess = strategy.next_guess(&snapshot).unwrap();
        let words: Vec<&str> = strategy.candidates().iter().collect();
        assert_eq!(words, ["COT", "CUT"]);

        // O and U tie, one blank left: guess the word with O
        assert_eq!(guess, Guess::Word("COT".to_string()));
    }

    #[test]
    fn one_blank_left_guesses_word() {
        let snapshot = Snapshot::new("CA-", "AC");
        let mut strategy = FrequencyStrategy::from_words(3, ["CAT", "CAR"]);

        let guess = strategy.next_guess(&snapshot).unwrap();
        assert!(guess.is_word());
        // R and T tie; alphabetical order picks R
        assert_eq!(guess, Guess::Word("CAR".to_string()));
    }

    #[test]
    fn last_blank_game_recovers_from_wrong_word() {
        let mut game = HangmanGame::new("CAT", 5).unwrap();
        let mut strategy = FrequencyStrategy::from_words(3, ["CAT", "CAR"]);

        let mut guesses = Vec::new();
        while game.status() == GameStatus::KeepGuessing {
            let guess = strategy.next_guess(&game).unwrap();
            apply(&guess, &mut game);
            guesses.push(guess);
        }

        assert_eq!(
            guesses,
            [
                Guess::Letter(b'A'),
                Guess::Letter(b'C'),
                Guess::Word("CAR".to_string()),
                Guess::Word("CAT".to_string()),
            ]
        );
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn failed_word_excludes_letter_for_ranking_only() {
        let mut game = HangmanGame::new("CAT", 5).unwrap();
        game.guess_letter('T').unwrap();
        game.guess_word("BAT").unwrap();
        assert_eq!(game.pattern().to_string(), "--T");

        let mut strategy = FrequencyStrategy::from_words(3, ["BAT", "CAT", "HAT", "COT"]);
        strategy.next_guess(&game).unwrap();

        // B is excluded for ranking and filtering...
        assert!(strategy.candidates().excluded().contains(b'B'));
        assert!(strategy.candidates().iter().all(|w| w != "BAT"));
        assert!(strategy.candidates().stat(b'B').is_none());

        // ...but was never a letter guess
        assert!(!game.guessed_letters().contains(b'B'));
        assert_eq!(game.guessed_letters(), LetterSet::from("T"));
    }

    #[test]
    fn letter_guess_excludes_only_true_guesses() {
        let mut snapshot = Snapshot::new("--T", "T");
        snapshot.wrong_words.push("BAT".to_string());

        let mut strategy = FrequencyStrategy::from_words(3, ["BAT", "CAT", "HAT", "COT", "CUT"]);
        let guess = strategy.next_guess(&snapshot).unwrap();

        // CAT, HAT, COT, CUT remain; C (3) leads the ranking
        assert_eq!(strategy.remaining(), 4);
        assert_eq!(guess, Guess::Letter(b'C'));
    }

    #[test]
    fn single_candidate_is_guessed_as_word() {
        let snapshot = Snapshot::new("----", "");
        let mut strategy = FrequencyStrategy::from_words(4, ["LION"]);

        assert_eq!(
            strategy.next_guess(&snapshot).unwrap(),
            Guess::Word("LION".to_string())
        );
    }

    #[test]
    fn last_chance_guesses_first_candidate() {
        let mut snapshot = Snapshot::new("-----", "Z");
        snapshot.remaining = 0;
        let mut strategy = FrequencyStrategy::from_words(5, ["APPLE", "ANGLE", "ANKLE"]);

        assert_eq!(
            strategy.next_guess(&snapshot).unwrap(),
            Guess::Word("APPLE".to_string())
        );
    }

    #[test]
    fn reuses_candidates_when_state_unchanged() {
        let snapshot = Snapshot::new("A----", "A");
        let mut strategy = FrequencyStrategy::from_words(5, ["APPLE", "ANGLE", "ANKLE", "OLIVE"]);

        let first = strategy.next_guess(&snapshot).unwrap();
        assert_eq!(strategy.remaining(), 3);
        let second = strategy.next_guess(&snapshot).unwrap();
        assert_eq!(first, second);
        assert_eq!(strategy.remaining(), 3);
    }

    #[test]
    fn unknown_secret_surfaces_error() {
        let mut game = HangmanGame::new("ZZZ", 5).unwrap();
        let mut strategy = FrequencyStrategy::from_words(3, ["CAT", "DOG", "COW"]);

        let result = loop {
            match strategy.next_guess(&game) {
                Ok(guess) => {
                    apply(&guess, &mut game);
                    if game.status() != GameStatus::KeepGuessing {
                        break None;
                    }
                }
                Err(err) => break Some(err),
            }
        };

        // Either the candidates run dry or the game is lost; never a bogus guess
        if let Some(err) = result {
            assert!(matches!(
                err,
                StrategyError::NoCandidates { .. } | StrategyError::NoLetterAvailable { .. }
            ));
        } else {
            assert_eq!(game.status(), GameStatus::Lost);
        }
    }

    #[test]
    fn candidate_count_never_grows() {
        let dictionary = Dictionary::embedded();
        for secret in dictionary.words_of_length(5).iter().take(40) {
            let mut game = HangmanGame::new(secret, 5).unwrap();
            let mut strategy = FrequencyStrategy::new(5, &dictionary);
            let mut last = strategy.remaining();

            while game.status() == GameStatus::KeepGuessing {
                let guess = strategy.next_guess(&game).unwrap();
                assert!(strategy.remaining() <= last, "{secret}: candidates grew");
                assert!(
                    strategy.candidates().iter().any(|w| w == secret.as_str()),
                    "{secret}: secret dropped"
                );
                last = strategy.remaining();
                apply(&guess, &mut game);
            }
        }
    }
}
