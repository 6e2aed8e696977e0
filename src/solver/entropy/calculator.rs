//! Shannon entropy calculation for feedback distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.
//! Used to report how informative a guess is; ranking never depends on it.

use crate::core::{Feedback, Word, classify};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Count candidates by the feedback they would give the guess
fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(classify(candidate, guess)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n distinct feedbacks
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates, and max partition size
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}
