//! Suggestion command
//!
//! Turns `word:feedback` arguments into a guess history and asks the solver
//! for the next guesses.

use crate::core::{Guess, ValidationError};
use crate::solver::{Solver, SolverError, SuggestionResult};

/// Parse command-line guesses such as `crane:--Y-G`
///
/// # Errors
///
/// Returns the first `ValidationError` encountered; nothing is partially parsed.
pub fn parse_history<S: AsRef<str>>(args: &[S]) -> Result<Vec<Guess>, ValidationError> {
    args.iter()
        .map(|arg| Guess::parse_pair(arg.as_ref()))
        .collect()
}

/// Suggest next guesses for the history given on the command line
///
/// # Errors
///
/// Returns an error if:
/// - Any guess argument is malformed
/// - Any guessed word is not in the word list
/// - The solver has not been initialized
pub fn run_suggest<S: AsRef<str>>(
    solver: &mut Solver,
    args: &[S],
    limit: usize,
) -> Result<SuggestionResult, SolverError> {
    let history = parse_history(args)?;
    solver.suggest_for(&history, limit)
}
