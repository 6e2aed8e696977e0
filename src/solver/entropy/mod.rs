//! Entropy analysis of guesses
//!
//! Reports Shannon entropy for a guess over the candidate pool. This is
//! analysis only; suggestions are ranked by letter frequency.

mod calculator;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
