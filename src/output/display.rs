//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::core::{Guess, Word, classify};
use crate::solver::SuggestionResult;
use colored::Colorize;

/// Print ranked suggestions for the next guess
pub fn print_suggestions(history: &[Guess], result: &SuggestionResult) {
    println!("\n{}", "─".repeat(60).cyan());

    if !history.is_empty() {
        for guess in history {
            println!("  {}", colored_guess(guess.word(), guess.feedback()));
        }
        println!();
    }

    if result.total_possible == 0 {
        println!("{}", result.message.red().bold());
        return;
    }

    println!("{}", result.message.bright_cyan().bold());
    for (i, word) in result.suggestions.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold()
        );
    }
}

/// Print the single best opening word
pub fn print_opener(word: &Word, answer_count: usize) {
    println!(
        "Start with {} ({} possible answers)",
        word.text().to_uppercase().bright_yellow().bold(),
        answer_count
    );
}

/// Print the feedback a guess would receive
pub fn print_classification(secret: &Word, guess: &Word) {
    let feedback = classify(secret, guess);
    println!(
        "{}  {}  {}",
        colored_guess(guess, &feedback),
        feedback.to_emoji(),
        feedback
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
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
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        println!("   {}", result.failures.join(", "));
    }
}
