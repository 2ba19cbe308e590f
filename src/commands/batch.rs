//! Batch scoring command
//!
//! Reads secret words one per line, plays each with a fresh strategy and prints
//! `WORD = score`, followed by a summary once input runs out.

use super::solve::solve_word;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Totals over all games played in a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub games: usize,
    pub total_score: usize,
    pub skipped: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.games > 0).then(|| self.total_score as f64 / self.games as f64)
    }

    /// Write the trailing summary block; nothing when no game was played
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if let Some(average) = self.average() {
            writeln!(out, "-----------------------------")?;
            writeln!(out, "AVG: {average}")?;
            writeln!(out, "NUM: {}", self.games)?;
            writeln!(out, "TOTAL: {}", self.total_score)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Score every word read from `input`
///
/// Words are uppercased before the dictionary lookup. Words missing from the
/// dictionary are reported on `err` and skipped; blank lines are ignored.
///
/// # Errors
/// Returns an error on I/O failure or if a game cannot be played to the end.
pub fn run_batch<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    dictionary: &Dictionary,
    max_wrong_guesses: usize,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line.context("Failed to read word from input")?;
        let word = line.trim().to_ascii_uppercase();
        if word.is_empty() {
            continue;
        }

        if !dictionary.contains(&word) {
            writeln!(err, "Word '{word}' is not in dictionary!")?;
            summary.skipped += 1;
            continue;
        }

        log::debug!("New Game [{word}]");
        let record = solve_word(&word, dictionary, max_wrong_guesses)
            .with_context(|| format!("Failed to play '{word}'"))?;

        summary.games += 1;
        summary.total_score += record.score;
        writeln!(out, "{word} = {}", record.score)?;
    }

    summary.write_to(out)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn run(input: &str) -> (BatchSummary, String, String) {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "cat", "car"]);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_batch(input.as_bytes(), &mut out, &mut err, &dictionary, 5).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn scores_each_word() {
        let (summary, out, err) = run("apple\nCAR\n");

        assert!(err.is_empty());
        assert_eq!(summary.games, 2);
        assert_eq!(summary.total_score, 4 + 2);
        assert_eq!(
            out,
            "APPLE = 4\nCAR = 2\n-----------------------------\nAVG: 3\nNUM: 2\nTOTAL: 6\n\n"
        );
    }

    #[test]
    fn unknown_words_are_reported_and_skipped() {
        let (summary, out, err) = run("zebra\n\ncat\n");

        assert_eq!(err, "Word 'ZEBRA' is not in dictionary!\n");
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.games, 1);
        assert!(out.starts_with("CAT = "));
    }

    #[test]
    fn empty_input_prints_no_summary() {
        let (summary, out, err) = run("");

        assert_eq!(summary, BatchSummary::default());
        assert!(summary.average().is_none());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn whole_number_average_has_no_fraction() {
        let summary = BatchSummary {
            games: 2,
            total_score: 8,
            skipped: 0,
        };
        let mut out = Vec::new();
        summary.write_to(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("AVG: 4\n"));
    }
}
