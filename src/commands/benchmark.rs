//! Benchmark command
//!
//! Plays the solver against a random sample of answer words and summarizes how
//! many guesses it needed.

use crate::core::Word;
use crate::solver::{Solver, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Turns allowed per game
pub const MAX_TURNS: usize = 6;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failures: Vec<String>,
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Play `count` randomly chosen answers (all of them if `count` is larger)
///
/// The sample is reproducible when `seed` is given.
///
/// # Errors
///
/// Returns `SolverError::Uninitialized` if the solver has no corpus.
pub fn run_benchmark(
    solver: &Solver,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult, SolverError> {
    let answers = solver.corpus()?.answer_words();
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let targets: Vec<&Word> = answers.choose_multiple(&mut rng, count).collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes = targets
        .par_iter()
        .map(|&target| {
            let played = solver.play(target, MAX_TURNS)?;
            pb.inc(1);
            let solved = played.last().is_some_and(|g| g.feedback().is_solved());
            Ok((target.text().to_string(), played.len(), solved))
        })
        .collect::<Result<Vec<_>, SolverError>>()?;
    pb.finish_with_message("done");
    let duration = start.elapsed();

    Ok(summarize(outcomes, duration))
}

fn summarize(outcomes: Vec<(String, usize, bool)>, duration: Duration) -> BenchmarkResult {
    let total_words = outcomes.len();
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut max_guesses = 0;

    for (word, guesses, solved) in outcomes {
        if solved {
            *distribution.entry(guesses).or_insert(0) += 1;
            total_guesses += guesses;
            max_guesses = max_guesses.max(guesses);
        } else {
            failures.push(word);
        }
    }

    let solved = total_words - failures.len();
    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };

    BenchmarkResult {
        total_words,
        solved,
        failures,
        average_guesses,
        max_guesses,
        distribution,
        duration,
    }
}
