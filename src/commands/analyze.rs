//! Word analysis command
//!
//! Reports the entropy and expected narrowing of a guess against the candidates
//! left by a history.

use super::suggest::parse_history;
use crate::core::Word;
use crate::solver::{Solver, SolverError};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

/// Analyze `word` against the pool left by `history_args`
///
/// # Errors
///
/// Returns an error if:
/// - The word or any history entry is malformed
/// - The word is not in the word list
/// - The solver has not been initialized
pub fn analyze_word<S: AsRef<str>>(
    solver: &mut Solver,
    word: &str,
    history_args: &[S],
) -> Result<AnalysisResult, SolverError> {
    let word_obj = Word::new(word).map_err(|_| SolverError::UnknownWord(word.to_string()))?;
    let history = parse_history(history_args)?;

    solver.suggest_for(&history, 0)?;
    let metrics = solver.analyze(&word_obj)?;
    let candidates = solver.candidates()?;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&word_obj),
    })
}
