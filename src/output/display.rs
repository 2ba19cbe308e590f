//! Display functions for command results

use super::formatters::{create_progress_bar, guess_label, spaced_pattern};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::core::{GameStatus, GameView};
use crate::solver::GameRecord;
use colored::Colorize;

/// Print the turns and outcome of a solved game
pub fn print_solve_result(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", record.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        let outcome = if turn.hit {
            "hit".green()
        } else {
            "miss".red()
        };
        println!(
            "\nTurn {}: {:<16} {}  {}",
            i + 1,
            guess_label(&turn.guess),
            spaced_pattern(&turn.pattern_after).bright_white().bold(),
            outcome
        );

        if verbose {
            println!("  Before:     {}", spaced_pattern(&turn.pattern_before));
            println!("  Candidates: {}", turn.candidates);
        }
    }

    println!();
    match record.status {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Won with score {} ({} wrong)",
                record.score, record.wrong_guesses
            )
            .green()
            .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ {} with score {}", record.status, record.score)
                .red()
                .bold()
        ),
    }
}

/// Print the analysis of a position
pub fn print_analysis_result(result: &AnalysisResult) {
    let position = &result.position;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POSITION ANALYSIS:".bright_cyan().bold(),
        spaced_pattern(position.pattern()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Guessed:      {}", position.guessed_letters());
    if !position.incorrect_words().is_empty() {
        println!("   Wrong words:  {}", position.incorrect_words().join(", "));
    }
    println!(
        "   Wrong left:   {}",
        position.wrong_guesses_remaining()
    );
    println!(
        "   Candidates:   {}",
        result.candidates.len().to_string().bright_yellow()
    );

    let top = result.top_letters(8);
    if let Some(best) = top.first() {
        println!("\n📊 {}", "Letter ranking:".bright_cyan().bold());
        for stat in top {
            let bar = create_progress_bar(stat.word_count as f64, best.word_count as f64, 30);
            println!(
                "   {} [{}] {:4} in {:4} words",
                char::from(stat.letter).to_string().bold(),
                bar.green(),
                stat.count,
                stat.word_count
            );
        }
    }

    if !result.candidates.is_empty() {
        let sample: Vec<&str> = result.candidates.iter().take(10).collect();
        let more = result.candidates.len().saturating_sub(sample.len());
        print!("\n   Sample:       {}", sample.join(" "));
        if more > 0 {
            print!(" (+{more} more)");
        }
        println!();
    }

    match &result.next_guess {
        Ok(guess) => println!(
            "\n   Next guess:   {}",
            guess_label(guess).bright_green().bold()
        ),
        Err(err) => println!("\n   {}", err.to_string().red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).green()
    );
    println!(
        "   Best score:       {}",
        format!("{}", result.min_score).green()
    );
    println!(
        "   Worst score:      {}",
        format!("{}", result.max_score).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&score, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {score:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
