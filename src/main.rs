//! Hangman Solver - CLI
//!
//! Scores words read from stdin by default; other subcommands solve, analyze,
//! benchmark and watch games in a TUI.

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        Position, analyze_position, print_test_all_statistics, run_batch, run_benchmark,
        run_test_all, select_words, solve_word,
    },
    core::DEFAULT_MAX_WRONG_GUESSES,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{Dictionary, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver using letter frequencies over the remaining candidate words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded word list)
    #[arg(short, long, global = true, env = "HANGMAN_DICT")]
    dict: Option<String>,

    /// Wrong guesses allowed before the game is lost; values below 1 mean 5
    #[arg(
        short = 'g',
        long,
        global = true,
        env = "HANGMAN_GUESSES",
        default_value = "5",
        allow_negative_numbers = true
    )]
    max_wrong: i64,

    /// Trace every turn on stderr (any HANGMAN_DEBUG value but 0/false/no/off enables it)
    #[arg(
        long,
        global = true,
        env = "HANGMAN_DEBUG",
        value_parser = FalseyValueParser::new()
    )]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score secret words read from stdin (default)
    Batch,

    /// Watch the solver play in an interactive TUI
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word
        word: String,

        /// Show the pattern before each turn and candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a game position
    Analyze {
        /// Revealed pattern, '-' or '_' for hidden letters (e.g. "a--le")
        pattern: String,

        /// Letters already guessed
        #[arg(long, default_value = "")]
        guessed: String,

        /// Words already guessed wrongly
        #[arg(long, value_delimiter = ',')]
        wrong_words: Vec<String>,
    },

    /// Benchmark on random dictionary words
    Benchmark {
        /// Number of random words to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Only draw words of this length
        #[arg(long)]
        length: Option<usize>,
    },

    /// Play every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only test words of this length
        #[arg(long)]
        length: Option<usize>,
    },
}

/// Normalize the wrong-guess limit; anything below 1 falls back to the default
fn max_wrong_guesses(requested: i64) -> usize {
    usize::try_from(requested)
        .ok()
        .filter(|&n| n >= 1)
        .unwrap_or(DEFAULT_MAX_WRONG_GUESSES)
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(Path::new(path))
            .with_context(|| format!("Failed to read dictionary '{path}'"))?,
        None => Dictionary::embedded(),
    };
    log::debug!("dictionary has {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let dictionary = load_dictionary(cli.dict.as_deref())?;
    let max_wrong = max_wrong_guesses(cli.max_wrong);

    // Default to batch mode if no command given
    let command = cli.command.unwrap_or(Commands::Batch);

    match command {
        Commands::Batch => run_batch_command(&dictionary, max_wrong),
        Commands::Play => run_play_command(&dictionary, max_wrong),
        Commands::Solve { word, verbose } => {
            run_solve_command(&word, verbose, &dictionary, max_wrong)
        }
        Commands::Analyze {
            pattern,
            guessed,
            wrong_words,
        } => run_analyze_command(&pattern, &guessed, &wrong_words, &dictionary, max_wrong),
        Commands::Benchmark {
            count,
            seed,
            length,
        } => run_benchmark_command(count, seed, length, &dictionary, max_wrong),
        Commands::TestAll { limit, length } => {
            run_test_all_command(limit, length, &dictionary, max_wrong)
        }
    }
}

fn run_batch_command(dictionary: &Dictionary, max_wrong: usize) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_batch(stdin, &mut stdout, &mut stderr, dictionary, max_wrong)?;
    Ok(())
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    dictionary: &Dictionary,
    max_wrong: usize,
) -> Result<()> {
    if !dictionary.contains(word) {
        log::warn!("'{word}' is not in the dictionary");
    }
    let record = solve_word(word, dictionary, max_wrong)?;
    print_solve_result(&record, verbose);
    Ok(())
}

fn run_analyze_command(
    pattern: &str,
    guessed: &str,
    wrong_words: &[String],
    dictionary: &Dictionary,
    max_wrong: usize,
) -> Result<()> {
    let position = Position::new(pattern, guessed, wrong_words, max_wrong)?;
    let result = analyze_position(position, dictionary);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    length: Option<usize>,
    dictionary: &Dictionary,
    max_wrong: usize,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match length {
        Some(len) => println!("Running benchmark on {count} random {len}-letter words..."),
        None => println!("Running benchmark on {count} random words..."),
    }

    let result = run_benchmark(dictionary, max_wrong, count, length, &mut rng)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    limit: Option<usize>,
    length: Option<usize>,
    dictionary: &Dictionary,
    max_wrong: usize,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Hangman Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nDictionary: {} words", dictionary.len());
    println!("Wrong guesses allowed: {max_wrong}");
    if let Some(len) = length {
        println!("Word length: {len}");
    }
    println!();

    let words = select_words(dictionary, limit, length);
    let stats = run_test_all(dictionary, max_wrong, &words)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, max_wrong: usize) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, max_wrong);
    run_tui(app)
}
