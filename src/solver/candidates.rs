//! Candidate word sets
//!
//! A [`CandidateSet`] holds every word still consistent with a revealed pattern
//! and a set of excluded letters, together with frequency statistics for the
//! letters that have not been excluded yet.
//!
//! Sets are assembled with a [`CandidateSetBuilder`] and frozen by
//! [`CandidateSetBuilder::build`]. A built set has no mutating methods; the only
//! way to narrow it is [`CandidateSet::refine`], which consumes it and builds a
//! new one from its own words.

use crate::core::{LetterSet, Pattern};
use std::fmt;

/// Frequency statistics for one letter over a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStat {
    /// The letter (uppercase ASCII)
    pub letter: u8,
    /// Total occurrences across all words; a letter appearing twice in a word counts twice
    pub count: usize,
    /// Number of words containing the letter at least once
    pub word_count: usize,
}

impl LetterStat {
    const fn empty(letter: u8) -> Self {
        Self {
            letter,
            count: 0,
            word_count: 0,
        }
    }
}

/// Accumulates matching words and their letter statistics
#[derive(Debug, Clone)]
pub struct CandidateSetBuilder {
    pattern: Pattern,
    excluded: LetterSet,
    words: Vec<String>,
    stats: [LetterStat; 26],
}

impl CandidateSetBuilder {
    /// Start an empty set for `pattern`, treating `excluded` letters as already ruled out
    #[must_use]
    pub fn new(pattern: Pattern, excluded: LetterSet) -> Self {
        let mut stats = [LetterStat::empty(b'A'); 26];
        for (stat, letter) in stats.iter_mut().zip(b'A'..=b'Z') {
            stat.letter = letter;
        }

        Self {
            pattern,
            excluded,
            words: Vec::new(),
            stats,
        }
    }

    /// Offer a word to the set
    ///
    /// Words that don't match the pattern, or that aren't uppercase ASCII, are
    /// dropped silently. Returns `true` if the word was accepted.
    pub fn insert<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str> + Into<String>,
    {
        let text = word.as_ref();
        if !text.bytes().all(|b| b.is_ascii_uppercase())
            || !self.pattern.matches(text, self.excluded)
        {
            return false;
        }

        let mut seen = LetterSet::new();
        for letter in text.bytes() {
            if self.excluded.contains(letter) {
                continue;
            }
            let stat = &mut self.stats[usize::from(letter - b'A')];
            stat.count += 1;
            if seen.insert(letter) {
                stat.word_count += 1;
            }
        }

        self.words.push(word.into());
        true
    }

    /// Freeze the set and compute the letter ranking
    ///
    /// Letters are ranked by occurrence count, then by word count, both
    /// descending. The sort is stable over alphabetical order, so remaining
    /// ties go to the earlier letter.
    #[must_use]
    pub fn build(self) -> CandidateSet {
        let mut ranking: Vec<LetterStat> = self
            .stats
            .into_iter()
            .filter(|stat| stat.count > 0)
            .collect();
        ranking.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.word_count.cmp(&a.word_count))
        });

        CandidateSet {
            pattern: self.pattern,
            excluded: self.excluded,
            words: self.words,
            ranking,
        }
    }
}

impl<S> Extend<S> for CandidateSetBuilder
where
    S: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// An immutable set of words consistent with a pattern and excluded letters
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pattern: Pattern,
    excluded: LetterSet,
    words: Vec<String>,
    ranking: Vec<LetterStat>,
}

impl CandidateSet {
    /// Build a set from every word of `words` that matches `pattern`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Pattern};
    /// use hangman_solver::solver::CandidateSet;
    ///
    /// let pattern = Pattern::parse("C-T").unwrap();
    /// let set = CandidateSet::build(pattern, LetterSet::from("A"), ["CAT", "COT", "CUT"]);
    ///
    /// let words: Vec<&str> = set.iter().collect();
    /// assert_eq!(words, ["COT", "CUT"]);
    /// ```
    #[must_use]
    pub fn build<I, S>(pattern: Pattern, excluded: LetterSet, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        let mut builder = CandidateSetBuilder::new(pattern, excluded);
        builder.extend(words);
        builder.build()
    }

    /// Narrow this set to the words matching a newer pattern and exclusion set
    ///
    /// Candidates only ever shrink during a game, so filtering the current words
    /// is equivalent to filtering the whole dictionary again.
    #[must_use]
    pub fn refine(self, pattern: Pattern, excluded: LetterSet) -> Self {
        Self::build(pattern, excluded, self.words)
    }

    /// Whether this set was built for exactly this pattern and exclusion set
    #[must_use]
    pub fn is_built_for(&self, pattern: &Pattern, excluded: LetterSet) -> bool {
        self.pattern == *pattern && self.excluded == excluded
    }

    /// The pattern this set was built with
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The excluded letters this set was built with
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The first word, in insertion order
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Iterate the words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Letter statistics, most frequent first
    #[must_use]
    pub fn ranking(&self) -> &[LetterStat] {
        &self.ranking
    }

    /// Statistics for one letter, if it occurs in any candidate
    #[must_use]
    pub fn stat(&self, letter: u8) -> Option<&LetterStat> {
        let letter = letter.to_ascii_uppercase();
        self.ranking.iter().find(|stat| stat.letter == letter)
    }

    /// The highest-ranked letter not in `excluded`
    ///
    /// Returns `None` when every ranked letter is excluded. That can't happen
    /// while the set is non-empty and the pattern still has a mystery position:
    /// each candidate holds a non-excluded letter there and so contributes it to
    /// the ranking.
    #[must_use]
    pub fn suggest(&self, excluded: LetterSet) -> Option<u8> {
        self.ranking
            .iter()
            .map(|stat| stat.letter)
            .find(|&letter| !excluded.contains(letter))
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet[{}]", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn build(pattern: &str, excluded: &str, words: &[&str]) -> CandidateSet {
        CandidateSet::build(
            Pattern::parse(pattern).unwrap(),
            LetterSet::from(excluded),
            words.iter().copied(),
        )
    }

    #[test]
    fn filters_by_pattern_and_exclusions() {
        let set = build("C-T", "A", &["CAT", "COT", "CUT"]);
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, ["COT", "CUT"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn drops_wrong_length_and_lowercase() {
        let set = build("---", "", &["CAT", "CART", "dog", "DOG"]);
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, ["CAT", "DOG"]);
    }

    #[test]
    fn counts_occurrences_and_words() {
        let set = build("-----", "", &["APPLE", "ANGLE", "ANKLE"]);

        let p = set.stat(b'P').unwrap();
        assert_eq!((p.count, p.word_count), (2, 1));

        let a = set.stat(b'A').unwrap();
        assert_eq!((a.count, a.word_count), (3, 3));

        let n = set.stat(b'n').unwrap();
        assert_eq!((n.count, n.word_count), (2, 2));

        assert!(set.stat(b'Z').is_none());
    }

    #[test]
    fn excluded_letters_have_no_stats() {
        let set = build("A----", "A", &["APPLE", "ANGLE", "ANKLE"]);
        assert_eq!(set.len(), 3);
        assert!(set.stat(b'A').is_none());
        assert!(set.ranking().iter().all(|stat| stat.letter != b'A'));
    }

    #[test]
    fn ranking_order() {
        let set = build("-----", "", &["APPLE", "ANGLE", "ANKLE"]);
        let order: String = set
            .ranking()
            .iter()
            .map(|stat| char::from(stat.letter))
            .collect();

        // A, E, L tie on (3, 3) and fall back to alphabetical order;
        // N (2, 2) beats P (2, 1) on word count; G and K tie on (1, 1)
        assert_eq!(order, "AELNPGK");
    }

    #[test]
    fn ranking_is_descending() {
        let dictionary = Dictionary::embedded();
        let set = CandidateSet::build(
            Pattern::mystery(5),
            LetterSet::new(),
            dictionary.words_of_length(5).iter().map(String::as_str),
        );

        for pair in set.ranking().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                (a.count, a.word_count) >= (b.count, b.word_count),
                "{a:?} ranked before {b:?}"
            );
            if (a.count, a.word_count) == (b.count, b.word_count) {
                assert!(a.letter < b.letter);
            }
        }
    }

    #[test]
    fn suggest_skips_excluded() {
        let set = build("-----", "", &["APPLE", "ANGLE", "ANKLE"]);
        assert_eq!(set.suggest(LetterSet::new()), Some(b'A'));
        assert_eq!(set.suggest(LetterSet::from("A")), Some(b'E'));
        assert_eq!(set.suggest(LetterSet::from("AEL")), Some(b'N'));
        assert_eq!(set.suggest(LetterSet::from("AELNPGK")), None);
    }

    #[test]
    fn suggest_is_deterministic() {
        let set = build("-----", "", &["APPLE", "ANGLE", "ANKLE", "OLIVE", "ONION"]);
        let excluded = LetterSet::from("E");
        let first = set.suggest(excluded);
        for _ in 0..10 {
            assert_eq!(set.suggest(excluded), first);
        }
    }

    #[test]
    fn empty_set_suggests_nothing() {
        let set = build("C-T", "AOU", &["CAT", "COT", "CUT"]);
        assert!(set.is_empty());
        assert!(set.ranking().is_empty());
        assert_eq!(set.suggest(LetterSet::new()), None);
        assert_eq!(set.first(), None);
    }

    #[test]
    fn refine_shrinks() {
        let set = build("-----", "", &["APPLE", "ANGLE", "ANKLE"]);
        let refined = set.refine(Pattern::parse("A--LE").unwrap(), LetterSet::from("AELN"));

        let words: Vec<&str> = refined.iter().collect();
        assert_eq!(words, ["APPLE"]);
        assert!(refined.is_built_for(&Pattern::parse("A--LE").unwrap(), LetterSet::from("AELN")));
    }

    #[test]
    fn refine_is_idempotent() {
        let pattern = Pattern::parse("C-T").unwrap();
        let excluded = LetterSet::from("A");
        let set = CandidateSet::build(pattern.clone(), excluded, ["CAT", "COT", "CUT"]);
        let again = set.clone().refine(pattern, excluded);

        assert_eq!(again.iter().collect::<Vec<_>>(), set.iter().collect::<Vec<_>>());
        assert_eq!(again.ranking(), set.ranking());
    }

    #[test]
    fn suggestion_exists_while_candidates_remain() {
        // Every non-empty set with a mystery position has a letter to offer
        let dictionary = Dictionary::embedded();
        for secret in dictionary.iter() {
            let secret_bytes = secret.as_bytes();
            // Reveal the first letter, exclude it
            let first = secret_bytes[0];
            let cells: String = secret_bytes
                .iter()
                .map(|&b| if b == first { char::from(b) } else { '-' })
                .collect();
            let pattern = Pattern::parse(&cells).unwrap();
            if pattern.is_complete() {
                continue;
            }

            let excluded = LetterSet::from_iter([first]);
            let set = CandidateSet::build(
                pattern,
                excluded,
                dictionary.words_of_length(secret.len()).iter().map(String::as_str),
            );

            assert!(set.iter().any(|w| w == secret), "{secret} filtered out");
            assert!(set.suggest(excluded).is_some(), "no suggestion for {secret}");
        }
    }

    #[test]
    fn into_iterator_for_reference() {
        let set = build("---", "", &["CAT", "DOG"]);
        let mut seen = Vec::new();
        for word in &set {
            seen.push(word);
        }
        assert_eq!(seen, ["CAT", "DOG"]);
        assert_eq!(set.to_string(), "CandidateSet[2]");
    }
}
