//! Test all words - comprehensive solver evaluation
//!
//! Plays every dictionary word (or a limited subset) and generates statistics.

use super::solve::solve_word;
use crate::solver::{GameRecord, SolveError};
use crate::wordlists::Dictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug, Default)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub total_score: usize,
    pub average_score: f64,
    /// Games per score, ascending by score
    pub score_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    /// Highest scoring words, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub first_guess_used: FxHashMap<String, usize>,
}

impl TestAllStatistics {
    /// Fold one finished game into the totals
    fn record(&mut self, record: &GameRecord) {
        self.total_words += 1;
        if record.won() {
            self.won += 1;
        } else {
            self.lost += 1;
        }
        self.total_score += record.score;
        *self.score_distribution.entry(record.score).or_insert(0) += 1;
        self.hardest_words.push((record.secret.clone(), record.score));
        if let Some(first) = record.turns.first() {
            *self
                .first_guess_used
                .entry(first.guess.to_string())
                .or_insert(0) += 1;
        }
    }

    fn finish(&mut self, total_time: Duration) {
        self.total_time = total_time;
        if self.total_words > 0 {
            self.average_score = self.total_score as f64 / self.total_words as f64;
        }
        // Highest score first, alphabetical among equals
        self.hardest_words
            .sort_by(|(wa, sa), (wb, sb)| sb.cmp(sa).then_with(|| wa.cmp(wb)));
        self.hardest_words.truncate(10);
    }

    /// First guesses by how often they were used, most common first
    #[must_use]
    pub fn first_guesses(&self) -> Vec<(&str, usize)> {
        let mut guesses: Vec<(&str, usize)> = self
            .first_guess_used
            .iter()
            .map(|(guess, &count)| (guess.as_str(), count))
            .collect();
        guesses.sort_by(|(ga, ca), (gb, cb)| cb.cmp(ca).then_with(|| ga.cmp(gb)));
        guesses
    }
}

/// Select the words a test run plays
///
/// Optionally restricted to one word length, then truncated to `limit`.
#[must_use]
pub fn select_words(
    dictionary: &Dictionary,
    limit: Option<usize>,
    length: Option<usize>,
) -> Vec<&str> {
    let mut words: Vec<&str> = match length {
        Some(len) => dictionary
            .words_of_length(len)
            .iter()
            .map(String::as_str)
            .collect(),
        None => dictionary.iter().collect(),
    };
    if let Some(limit) = limit {
        words.truncate(limit);
    }
    words
}

/// Play each word with a fresh strategy, showing a progress bar
///
/// # Errors
/// Returns `SolveError` if a game cannot be played to the end.
pub fn run_test_all(
    dictionary: &Dictionary,
    max_wrong_guesses: usize,
    words: &[&str],
) -> Result<TestAllStatistics, SolveError> {
    println!("🎯 Testing {} words...", words.len());

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut stats = TestAllStatistics::default();
    let start = Instant::now();

    for (idx, secret) in words.iter().enumerate() {
        let record = match solve_word(secret, dictionary, max_wrong_guesses) {
            Ok(record) => record,
            Err(err) => {
                pb.abandon_with_message(format!("Failed on {secret}"));
                return Err(err);
            }
        };
        stats.record(&record);

        if idx % 10 == 0 {
            let avg = stats.total_score as f64 / stats.total_words as f64;
            pb.set_message(format!("Avg score: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    stats.finish(start.elapsed());
    Ok(stats)
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    if stats.total_words == 0 {
        println!("\nNo words to test.");
        return;
    }
    let total = stats.total_words as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.won as f64 / total * 100.0).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:                {} {}",
            stats.lost,
            format!("({:.1}%)", stats.lost as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average score:       {}",
        format!("{:.3}", stats.average_score)
            .bright_yellow()
            .bold()
    );
    println!("  Total score:         {}", stats.total_score);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Score Distribution".bright_cyan().bold());
    let max_count = stats
        .score_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (&score, &count) in &stats.score_distribution {
        let percentage = count as f64 / total * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  score {score:2}: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, score) in stats.hardest_words.iter().take(5) {
            println!("  {} (score {score})", word.yellow());
        }
    }

    println!("\n🎯 First Guess Usage");
    for (guess, count) in stats.first_guesses().into_iter().take(5) {
        let percentage = count as f64 / total * 100.0;
        println!("  {guess}: {count} times ({percentage:.1}%)");
    }
}
