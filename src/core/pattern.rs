//! Revealed-word pattern
//!
//! A pattern is the secret word as the player currently sees it: one cell per
//! position, holding either the revealed letter or [`MYSTERY_LETTER`].
//! For example `AB--T` is a five-letter word with the first, second and last
//! letters revealed.

use super::LetterSet;
use std::fmt;

/// Marker for positions of the secret word that have not been revealed yet
pub const MYSTERY_LETTER: u8 = b'-';

/// The revealed letters of a secret word
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<u8>,
}

/// Error type for invalid patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must contain at least one position"),
            Self::InvalidCharacter(ch) => write!(
                f,
                "Pattern may only contain letters and '{}', got '{ch}'",
                MYSTERY_LETTER as char
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Create a pattern with every position unrevealed
    #[must_use]
    pub fn mystery(len: usize) -> Self {
        Self {
            cells: vec![MYSTERY_LETTER; len],
        }
    }

    /// Parse a pattern such as `"a--le"`
    ///
    /// Letters are normalized to uppercase. `_` is accepted as an alias for
    /// [`MYSTERY_LETTER`].
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is empty or contains anything other
    /// than ASCII letters and mystery markers.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("a--le").unwrap();
    /// assert_eq!(pattern.to_string(), "A--LE");
    /// assert_eq!(pattern.mystery_count(), 2);
    ///
    /// assert!(Pattern::parse("a?le").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = text
            .chars()
            .map(|ch| match ch {
                '-' | '_' => Ok(MYSTERY_LETTER),
                c if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase() as u8),
                c => Err(PatternError::InvalidCharacter(c)),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { cells })
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cells, with [`MYSTERY_LETTER`] for unrevealed positions
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn mystery_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == MYSTERY_LETTER).count()
    }

    /// Index of the first unrevealed position, if any
    #[must_use]
    pub fn first_mystery(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == MYSTERY_LETTER)
    }

    /// Whether every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&MYSTERY_LETTER)
    }

    /// Letters currently revealed anywhere in the pattern
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.cells
            .iter()
            .copied()
            .filter(|&c| c != MYSTERY_LETTER)
            .collect()
    }

    /// Reveal every position of `secret` holding `letter`
    ///
    /// Returns `true` if at least one position was revealed.
    pub(crate) fn reveal(&mut self, secret: &[u8], letter: u8) -> bool {
        let mut hit = false;
        for (cell, &ch) in self.cells.iter_mut().zip(secret) {
            if ch == letter {
                *cell = ch;
                hit = true;
            }
        }
        hit
    }

    /// Reveal the whole secret word
    pub(crate) fn reveal_all(&mut self, secret: &[u8]) {
        self.cells.copy_from_slice(secret);
    }

    /// Check whether a candidate word is consistent with this pattern
    ///
    /// A word matches iff it has the same length and, at every position, either
    /// the pattern shows that exact letter, or the position is unrevealed and the
    /// word's letter is not in `excluded`. An excluded letter can't hide behind a
    /// mystery position: had it been in the secret there, it would have been
    /// revealed.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Pattern};
    ///
    /// let pattern = Pattern::parse("C-T").unwrap();
    /// let guessed = LetterSet::from("A");
    ///
    /// assert!(pattern.matches("COT", guessed));
    /// assert!(!pattern.matches("CAT", guessed));
    /// assert!(!pattern.matches("CART", guessed));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str, excluded: LetterSet) -> bool {
        let word = word.as_bytes();
        word.len() == self.cells.len()
            && self.cells.iter().zip(word).all(|(&cell, &ch)| {
                if cell == MYSTERY_LETTER {
                    !excluded.contains(ch)
                } else {
                    cell == ch
                }
            })
    }

    /// Substitute `letter` into every unrevealed position
    ///
    /// Used to turn a single-blank pattern into a whole-word guess.
    #[must_use]
    pub fn fill(&self, letter: u8) -> String {
        self.cells
            .iter()
            .map(|&c| char::from(if c == MYSTERY_LETTER { letter } else { c }))
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells are always ASCII
        write!(f, "{}", String::from_utf8_lossy(&self.cells))
    }
}
