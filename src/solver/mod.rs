//! Constraint solving for Wordle
//!
//! Filters the answer vocabulary down to words consistent with every guess,
//! then ranks the survivors by letter frequency over the pool.

mod engine;
pub mod entropy;
pub mod filter;
pub mod scoring;
mod state;

pub use engine::{DEFAULT_OPENER, OPENERS, Solver, SolverError, SuggestionResult};
pub use scoring::{DEFAULT_SUGGESTION_LIMIT, LetterFrequency, ScoringWindow};
pub use state::SolverState;
