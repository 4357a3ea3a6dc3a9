//! Display functions for command results

use super::formatters::{create_progress_bar, format_chain, format_sides};
use crate::commands::{BenchmarkResult, SolveResult, WordsResult};
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}",
        format_sides(&result.puzzle).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.words {
        Some(words) => {
            println!("\n  {}", format_chain(words).bold());
            println!();
            println!(
                "{}",
                format!("✅ Solved in {} words!", words.len()).green().bold()
            );
        }
        None => {
            println!();
            println!("{}", "❌ No solution found".red().bold());
        }
    }

    println!("   Time taken:  {:.2}s", result.duration.as_secs_f64());

    if verbose {
        let stats = &result.stats;
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Expanded:       {}", stats.expanded);
        println!("   Generated:      {}", stats.generated);
        println!("   Pruned:         {}", stats.pruned);
        println!("   Peak frontier:  {}", stats.peak_frontier);
    }
}

/// Print the words found for a prefix
pub fn print_words_result(result: &WordsResult) {
    if result.words.is_empty() {
        println!(
            "No words start with {}",
            result.prefix.to_uppercase().bright_yellow()
        );
        return;
    }

    println!(
        "\n{} words start with {}:",
        result.words.len(),
        result.prefix.to_uppercase().bright_yellow().bold()
    );
    for word in &result.words {
        println!("  • {word}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧩 {}", "Puzzles:".bright_cyan().bold());
    for run in &result.runs {
        let sides = run.sides.join("-").to_uppercase();
        match (&run.words, &run.error) {
            (Some(words), _) => println!(
                "   {sides:<20} {} ({:.2}s)",
                format_chain(words).green(),
                run.duration.as_secs_f64()
            ),
            (None, Some(error)) => println!("   {sides:<20} {}", error.yellow()),
            (None, None) => println!(
                "   {sides:<20} {} ({:.2}s)",
                "no solution".red(),
                run.duration.as_secs_f64()
            ),
        }
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.runs.len());
    println!("   Solved:           {}", format!("{}", result.solved).green());
    println!("   Unsolved:         {}", format!("{}", result.unsolved).red());
    if result.invalid > 0 {
        println!("   Invalid:          {}", format!("{}", result.invalid).yellow());
    }
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!("   Answers expanded: {}", result.total_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = result.distribution[&length];
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
