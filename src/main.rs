//! Letter Boxed Solver - CLI
//!
//! Shortest word-chain solver for Letter Boxed style puzzles.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use letter_boxed::{
    commands::{
        SolveConfig,
        benchmark::{load_puzzles, sample_puzzles},
        list_words, run_benchmark, solve_puzzle,
    },
    dictionary::{Dictionary, loader::load_from_file},
    output::{print_benchmark_result, print_solve_result, print_words_result},
    solver::SolverConfig,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Find the shortest word chain that solves a Letter Boxed puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'builtin' (default, bundled list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Maximum number of words in a chain
    #[arg(short, long, global = true, default_value_t = SolverConfig::DEFAULT_WORD_LIMIT)]
    limit: usize,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle given its sides
    Solve {
        /// Letters of each side, e.g. `tul dca rph nes`
        #[arg(required = true, num_args = 1..)]
        sides: Vec<String>,
    },

    /// List dictionary words starting with a prefix
    Words {
        /// Prefix to complete
        prefix: String,
    },

    /// Solve a batch of puzzles and report timings
    Benchmark {
        /// File with one puzzle per line (default: built-in samples)
        file: Option<PathBuf>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "builtin" => Ok(Dictionary::builtin()),
        path => load_from_file(path).with_context(|| format!("Failed to read word list '{path}'")),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    if dictionary.is_empty() {
        anyhow::bail!("Word list '{}' contains no usable words", cli.wordlist);
    }

    match cli.command {
        Commands::Solve { sides } => run_solve_command(sides, cli.limit, cli.verbose > 0, &dictionary),
        Commands::Words { prefix } => run_words_command(&prefix, &dictionary),
        Commands::Benchmark { file } => run_benchmark_command(file, cli.limit, &dictionary),
    }
}

fn run_solve_command(
    sides: Vec<String>,
    limit: usize,
    verbose: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let mut config = SolveConfig::new(sides);
    config.word_limit = limit;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = solve_puzzle(config, dictionary);
    spinner.finish_and_clear();

    let result = result.map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_words_command(prefix: &str, dictionary: &Dictionary) -> Result<()> {
    let result = list_words(prefix, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_words_result(&result);
    Ok(())
}

fn run_benchmark_command(
    file: Option<PathBuf>,
    limit: usize,
    dictionary: &Dictionary,
) -> Result<()> {
    let puzzles = match file {
        Some(path) => load_puzzles(&path)
            .with_context(|| format!("Failed to read puzzles from '{}'", path.display()))?,
        None => sample_puzzles(),
    };

    println!("Solving {} puzzles (word limit {limit})...", puzzles.len());
    let result = run_benchmark(&puzzles, dictionary, limit);
    print_benchmark_result(&result);
    Ok(())
}
