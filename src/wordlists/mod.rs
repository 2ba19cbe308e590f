//! Dictionaries for Hangman solving
//!
//! A [`Dictionary`] is a set of uppercase words grouped by length. Games only
//! ever look at words of one length, so grouping up front keeps strategy setup
//! to a single slice copy.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashMap;

/// A set of uppercase words, grouped by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<String>>,
    len: usize,
}

impl Dictionary {
    /// The dictionary embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        loader::words_from_slice(WORDS)
    }

    /// Build a dictionary from words that are already normalized
    ///
    /// Words are expected to be uppercase ASCII letters; see
    /// [`loader::normalize`] for cleaning raw input.
    pub fn from_normalized<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }

        let mut len = 0;
        for group in by_length.values_mut() {
            group.sort_unstable();
            group.dedup();
            len += group.len();
        }

        Self { by_length, len }
    }

    /// Total number of words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All words of the given length, sorted
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Check whether a word is in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.words_of_length(word.len())
            .binary_search(&word)
            .is_ok()
    }

    /// Iterate every word, shortest first, alphabetical within a length
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lengths()
            .into_iter()
            .flat_map(|len| self.words_of_length(len))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        let dictionary = Dictionary::embedded();
        // Every entry survives normalization
        assert_eq!(dictionary.len(), WORDS_COUNT);
        for word in dictionary.iter() {
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' is not uppercase letters"
            );
        }
    }

    #[test]
    fn groups_by_length() {
        let dictionary = Dictionary::from_normalized(
            ["CAT", "APPLE", "DOG", "CAT", "LION"].map(String::from),
        );

        assert_eq!(dictionary.len(), 4); // Duplicate CAT collapsed
        assert_eq!(dictionary.words_of_length(3), ["CAT", "DOG"]);
        assert_eq!(dictionary.words_of_length(5), ["APPLE"]);
        assert!(dictionary.words_of_length(7).is_empty());
        assert_eq!(dictionary.lengths(), [3, 4, 5]);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dictionary = Dictionary::from_normalized(["APPLE".to_string()]);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains(" Apple "));
        assert!(!dictionary.contains("apples"));
    }

    #[test]
    fn iter_is_ordered() {
        let dictionary =
            Dictionary::from_normalized(["DOG", "APPLE", "CAT"].map(String::from));
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["CAT", "DOG", "APPLE"]);
    }
}
